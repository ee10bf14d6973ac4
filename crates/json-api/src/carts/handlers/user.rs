//! User Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::into_api_error, handlers::CartResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// User Cart Handler
///
/// Lets an admin inspect the cart a user currently holds.
#[endpoint(tags("carts"), summary = "Get User Cart")]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .get_user_cart(user.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(cart.into()))
}
