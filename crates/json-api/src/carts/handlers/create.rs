//! Create Cart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use maanushi_app::domain::carts::{data::NewCart, records::CartUuid};

use crate::{
    carts::{errors::into_api_error, handlers::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Create Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartRequest {
    /// Client supplied id; generated when omitted
    pub uuid: Option<Uuid>,

    /// Owner of the cart. A user has at most one cart.
    pub user_uuid: Uuid,
}

impl From<CreateCartRequest> for NewCart {
    fn from(request: CreateCartRequest) -> Self {
        NewCart {
            uuid: request.uuid.map_or_else(CartUuid::new, CartUuid::from_uuid),
            user_uuid: request.user_uuid.into(),
        }
    }
}

/// Create Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::CONFLICT, description = "User already has a cart"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.create",
    skip(json, depot, res),
    fields(user_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    tracing::Span::current().record("user_uuid", tracing::field::display(request.user_uuid));

    let cart = state
        .app
        .carts
        .create_cart(request.into())
        .await
        .map_err(into_api_error)?;

    info!(cart_uuid = %cart.uuid, "created cart");

    res.add_header(LOCATION, format!("/carts/{}", cart.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}
