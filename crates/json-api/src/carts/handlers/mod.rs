//! Cart Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use maanushi_app::domain::carts::records::{CartItemRecord, CartRecord};

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod user;

/// One line of a cart
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemResponse {
    pub uuid: Uuid,
    pub product_details_uuid: Uuid,
    pub quantity: u32,

    /// `quantity` times the unit price, in minor units
    pub total_price: u64,
}

impl From<CartItemRecord> for CartItemResponse {
    fn from(item: CartItemRecord) -> Self {
        CartItemResponse {
            uuid: item.uuid.into(),
            product_details_uuid: item.product_details_uuid.into(),
            quantity: item.quantity,
            total_price: item.total_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    pub uuid: Uuid,
    pub user_uuid: Uuid,

    /// Sum of every line's `total_price`
    pub grand_total: u64,

    pub items: Vec<CartItemResponse>,
    pub updated_at: String,
}

impl From<CartRecord> for CartResponse {
    fn from(cart: CartRecord) -> Self {
        CartResponse {
            uuid: cart.uuid.into(),
            user_uuid: cart.user_uuid.into(),
            grand_total: cart.grand_total,
            items: cart.items.into_iter().map(Into::into).collect(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}
