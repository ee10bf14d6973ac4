//! Errors

use tracing::error;

use maanushi_app::domain::orders::OrdersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: OrdersServiceError) -> ApiError {
    match error {
        OrdersServiceError::NotFound => ApiError::not_found("order not found"),
        OrdersServiceError::InvalidReference | OrdersServiceError::InvalidData => {
            ApiError::bad_request("invalid order payload")
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            ApiError::Internal
        }
    }
}
