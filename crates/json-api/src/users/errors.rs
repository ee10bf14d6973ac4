//! Errors

use tracing::error;

use maanushi_app::domain::users::UsersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: UsersServiceError) -> ApiError {
    match error {
        UsersServiceError::AlreadyExists => ApiError::conflict("user already exists"),
        UsersServiceError::NotFound => ApiError::not_found("user not found"),
        UsersServiceError::Validation(reason) => ApiError::bad_request(reason.to_string()),
        UsersServiceError::MissingRequiredData | UsersServiceError::InvalidData => {
            ApiError::bad_request("invalid user payload")
        }
        UsersServiceError::Sql(source) => {
            error!("user storage error: {source}");

            ApiError::Internal
        }
    }
}
