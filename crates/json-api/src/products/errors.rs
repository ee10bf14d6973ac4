//! Product Errors

use tracing::error;

use maanushi_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::AlreadyExists => ApiError::conflict("product already exists"),
        ProductsServiceError::NotFound => ApiError::not_found("product not found"),
        ProductsServiceError::EmptyName => ApiError::bad_request(error.to_string()),
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => ApiError::bad_request("invalid product payload"),
        ProductsServiceError::Sql(source) => {
            error!("product storage error: {source}");

            ApiError::Internal
        }
    }
}
