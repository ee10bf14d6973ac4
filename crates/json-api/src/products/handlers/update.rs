//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use maanushi_app::domain::products::data::ProductUpdate;

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error,
    products::handlers::ProductResponse, state::State,
};

/// Update Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Omit or send `null` to clear the discount
    pub discount_price: Option<u64>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            description: request.description,
            discount_price: request.discount_price,
        }
    }
}

/// Update Product Handler
#[endpoint(tags("products"), summary = "Update Product")]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner();

    tracing::Span::current().record("product_uuid", tracing::field::display(product));

    let product = state
        .app
        .products
        .update_product(product.into(), json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    info!(product_uuid = %product.uuid, "updated product");

    Ok(Json(product.into()))
}
