//! Errors

use tracing::error;

use maanushi_app::domain::admins::AdminsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: AdminsServiceError) -> ApiError {
    match error {
        AdminsServiceError::AlreadyExists => ApiError::conflict("admin already exists"),
        AdminsServiceError::NotFound => ApiError::not_found("admin not found"),
        AdminsServiceError::InvalidCredentials => {
            ApiError::unauthorized("invalid email or password")
        }
        AdminsServiceError::Validation(reason) => ApiError::bad_request(reason.to_string()),
        AdminsServiceError::MissingRequiredData | AdminsServiceError::InvalidData => {
            ApiError::bad_request("invalid admin payload")
        }
        AdminsServiceError::Password(source) => {
            error!("admin password hashing failed: {source}");

            ApiError::Internal
        }
        AdminsServiceError::Session(source) => {
            error!("failed to issue admin session: {source}");

            ApiError::Internal
        }
        AdminsServiceError::Sql(source) => {
            error!("admin storage error: {source}");

            ApiError::Internal
        }
    }
}
