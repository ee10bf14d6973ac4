//! Update Order Status Handler

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

use maanushi_app::domain::orders::records::OrderStatus;

use crate::{
    errors::ApiError, extensions::*, orders::errors::into_api_error,
    orders::handlers::OrderDetailResponse, state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusRequest {
    /// New status name, e.g. `shipped`
    pub status: String,
}

/// Update Order Status Handler
///
/// Moves a single order line to a new status.
#[endpoint(tags("orders"), summary = "Update Order Line Status")]
#[tracing::instrument(
    name = "orders.status.update",
    skip(detail, json, depot),
    fields(
        detail_uuid = tracing::field::Empty,
        status = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    detail: PathParam<Uuid>,
    json: JsonBody<UpdateStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderDetailResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let detail = detail.into_inner();

    let status = json
        .into_inner()
        .status
        .parse::<OrderStatus>()
        .map_err(|error| ApiError::bad_request(error.to_string()))?;

    let span = tracing::Span::current();

    span.record("detail_uuid", tracing::field::display(detail));
    span.record("status", status.as_str());

    let detail = state
        .app
        .orders
        .update_order_status(detail.into(), status)
        .await
        .map_err(into_api_error)?;

    info!(detail_uuid = %detail.uuid, status = %detail.status, "order status updated");

    Ok(Json(detail.into()))
}
