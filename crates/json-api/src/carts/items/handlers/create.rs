//! Add Cart Item Handler

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

use maanushi_app::domain::carts::{data::NewCartItem, records::CartItemUuid};

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

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    pub uuid: Option<Uuid>,
    pub product_details_uuid: Uuid,
    pub quantity: u32,
}

impl From<AddCartItemRequest> for NewCartItem {
    fn from(request: AddCartItemRequest) -> Self {
        NewCartItem {
            uuid: request
                .uuid
                .map_or_else(CartItemUuid::new, CartItemUuid::from_uuid),
            product_details_uuid: request.product_details_uuid.into(),
            quantity: request.quantity,
        }
    }
}

/// Add Cart Item Handler
///
/// Adding a variant that is already in the cart increases that line's
/// quantity instead of creating a second line.
#[endpoint(
    tags("carts"),
    summary = "Add Cart Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added, cart total recomputed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart or product variant not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.create",
    skip(cart, json, depot, res),
    fields(cart_uuid = Empty, product_details_uuid = Empty, quantity = Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemChangeResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = cart.into_inner();
    let request = json.into_inner();

    let span = Span::current();

    span.record("cart_uuid", tracing::field::display(cart));
    span.record(
        "product_details_uuid",
        tracing::field::display(request.product_details_uuid),
    );
    span.record("quantity", request.quantity);

    let change = match state.app.carts.add_item(cart.into(), request.into()).await {
        Ok(change) => change,
        Err(error) => {
            record_cart_mutation("add_item", outcome(&error));

            return Err(into_api_error(error));
        }
    };

    record_cart_mutation("add_item", "success");

    info!(
        item_uuid = %change.item.uuid,
        grand_total = change.cart.grand_total,
        "added cart item"
    );

    res.status_code(StatusCode::CREATED);

    Ok(Json(change.into()))
}
