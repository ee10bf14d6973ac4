//! Product Handlers

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use maanushi_app::domain::products::{
    data::NewProductDetails,
    records::{ProductDetailsRecord, ProductDetailsUuid, ProductRecord},
};

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod details;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

/// A purchasable variant of a product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDetailsResponse {
    pub uuid: Uuid,

    /// Unit price in minor units
    pub price: u64,

    pub stock: u64,
}

impl From<ProductDetailsRecord> for ProductDetailsResponse {
    fn from(details: ProductDetailsRecord) -> Self {
        ProductDetailsResponse {
            uuid: details.uuid.into(),
            price: details.price,
            stock: details.stock,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub name: String,

    pub description: String,

    /// Sale price in minor units, when discounted
    pub discount_price: Option<u64>,

    /// Live variants of the product
    pub details: Vec<ProductDetailsResponse>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,

    /// The date and time the product was deleted
    pub deleted_at: Option<String>,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            description: product.description,
            discount_price: product.discount_price,
            details: product.details.into_iter().map(Into::into).collect(),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
            deleted_at: product.deleted_at.as_ref().map(ToString::to_string),
        }
    }
}

/// Variant fields accepted when creating a product or adding details to one
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDetailsRequest {
    /// Client supplied id; generated when omitted
    pub uuid: Option<Uuid>,

    /// Unit price in minor units
    pub price: u64,

    pub stock: u64,
}

impl From<ProductDetailsRequest> for NewProductDetails {
    fn from(request: ProductDetailsRequest) -> Self {
        NewProductDetails {
            uuid: request
                .uuid
                .map_or_else(ProductDetailsUuid::new, ProductDetailsUuid::from_uuid),
            price: request.price,
            stock: request.stock,
        }
    }
}
