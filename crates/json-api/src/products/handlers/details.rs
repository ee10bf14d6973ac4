//! Add Product Details Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        errors::into_api_error,
        handlers::{ProductDetailsRequest, ProductDetailsResponse},
    },
    state::State,
};

/// Add Product Details Handler
///
/// Adds a purchasable variant to a live product.
#[endpoint(
    tags("products"),
    summary = "Add Product Details",
    responses(
        (status_code = StatusCode::CREATED, description = "Details added"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.details.create",
    skip(product, json, depot, res),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<ProductDetailsRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductDetailsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner();

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    let details = state
        .app
        .products
        .add_product_details(product.into(), json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    info!(product_uuid = %product, details_uuid = %details.uuid, "added product details");

    res.status_code(StatusCode::CREATED);

    Ok(Json(details.into()))
}
