//! Products Data

use crate::domain::products::records::{ProductDetailsUuid, ProductUuid};

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub discount_price: Option<u64>,
    pub details: Vec<NewProductDetails>,
}

/// New Product Details Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductDetails {
    pub uuid: ProductDetailsUuid,
    pub price: u64,
    pub stock: u64,
}

/// Product Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub discount_price: Option<u64>,
}
