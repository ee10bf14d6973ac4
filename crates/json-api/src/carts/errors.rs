//! Errors

use tracing::error;

use maanushi_app::domain::carts::CartsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: CartsServiceError) -> ApiError {
    match error {
        CartsServiceError::AlreadyExists => ApiError::conflict("user already has a cart"),
        CartsServiceError::NotFound => ApiError::not_found("cart, item or product not found"),
        CartsServiceError::InvalidReference => ApiError::not_found("user not found"),
        CartsServiceError::InvalidQuantity | CartsServiceError::TotalOverflow => {
            ApiError::bad_request(error.to_string())
        }
        CartsServiceError::MissingRequiredData | CartsServiceError::InvalidData => {
            ApiError::bad_request("invalid cart payload")
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            ApiError::Internal
        }
    }
}

/// Metric label for the outcome of a cart mutation.
pub(crate) fn outcome(error: &CartsServiceError) -> &'static str {
    match error {
        CartsServiceError::NotFound | CartsServiceError::InvalidReference => "not_found",
        CartsServiceError::InvalidQuantity
        | CartsServiceError::TotalOverflow
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData
        | CartsServiceError::AlreadyExists => "rejected",
        CartsServiceError::Sql(_) => "error",
    }
}
