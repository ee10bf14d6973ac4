//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub discount_price: Option<u64>,
    pub details: Vec<ProductDetailsRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Product Details UUID
pub type ProductDetailsUuid = TypedUuid<ProductDetailsRecord>;

/// Product Details Record
///
/// A purchasable variant of a product carrying its own price and stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetailsRecord {
    pub uuid: ProductDetailsUuid,
    pub product_uuid: ProductUuid,
    pub price: u64,
    pub stock: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}
