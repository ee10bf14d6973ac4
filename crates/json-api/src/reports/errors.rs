//! Errors

use tracing::error;

use maanushi_app::domain::reports::ReportsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ReportsServiceError) -> ApiError {
    match error {
        ReportsServiceError::InvalidFrequency(_) | ReportsServiceError::InvalidMonth => {
            ApiError::bad_request(error.to_string())
        }
        ReportsServiceError::Sql(source) => {
            error!("failed to build report: {source}");

            ApiError::Internal
        }
    }
}
