//! Cart Item Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use maanushi_app::domain::carts::data::CartItemChange;

use crate::carts::handlers::{CartItemResponse, CartResponse};

pub(crate) mod create;
pub(crate) mod update;

/// The written line together with the cart it now belongs to
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartItemChangeResponse {
    pub item: CartItemResponse,
    pub cart: CartResponse,
}

impl From<CartItemChange> for CartItemChangeResponse {
    fn from(change: CartItemChange) -> Self {
        CartItemChangeResponse {
            item: change.item.into(),
            cart: change.cart.into(),
        }
    }
}
