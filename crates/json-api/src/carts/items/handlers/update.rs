//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{Span, field::Empty, info};
use uuid::Uuid;

use crate::{
    carts::{
        errors::{into_api_error, outcome},
        items::handlers::CartItemChangeResponse,
    },
    errors::ApiError,
    extensions::*,
    observability::record_cart_mutation,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New absolute quantity for the line
    pub quantity: u32,
}

/// Update Cart Item Handler
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Item updated, cart total recomputed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.update",
    skip(cart, item, json, depot),
    fields(cart_uuid = Empty, item_uuid = Empty, quantity = Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    item: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartItemChangeResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = cart.into_inner();
    let item = item.into_inner();
    let quantity = json.into_inner().quantity;

    let span = Span::current();

    span.record("cart_uuid", tracing::field::display(cart));
    span.record("item_uuid", tracing::field::display(item));
    span.record("quantity", quantity);

    let change = match state
        .app
        .carts
        .update_item(cart.into(), item.into(), quantity)
        .await
    {
        Ok(change) => change,
        Err(error) => {
            record_cart_mutation("update_item", outcome(&error));

            return Err(into_api_error(error));
        }
    };

    record_cart_mutation("update_item", "success");

    info!(grand_total = change.cart.grand_total, "updated cart item");

    Ok(Json(change.into()))
}
