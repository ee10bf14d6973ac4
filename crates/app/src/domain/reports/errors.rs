//! Reports service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportsServiceError {
    #[error("frequency must be MONTHLY or YEARLY, got `{0}`")]
    InvalidFrequency(String),

    #[error("month must be between 1 and 12")]
    InvalidMonth,

    #[error("storage error")]
    Sql(#[from] Error),
}
