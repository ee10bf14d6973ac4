//! Cart Data

use crate::domain::{
    carts::records::{CartItemRecord, CartItemUuid, CartRecord, CartUuid},
    products::records::ProductDetailsUuid,
    users::records::UserUuid,
};

/// New Cart Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCart {
    pub uuid: CartUuid,
    pub user_uuid: UserUuid,
}

/// New Cart Item Data
///
/// `uuid` is only used when no line for the same product details exists yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub uuid: CartItemUuid,
    pub product_details_uuid: ProductDetailsUuid,
    pub quantity: u32,
}

/// Outcome of a line-item mutation: the written line and the cart after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemChange {
    pub item: CartItemRecord,
    pub cart: CartRecord,
}
