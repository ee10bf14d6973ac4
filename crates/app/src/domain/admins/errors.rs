//! Admins service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{
    auth::{PasswordError, SessionTokenError},
    validation::ValidationError,
};

#[derive(Debug, Error)]
pub enum AdminsServiceError {
    #[error("admin already exists")]
    AlreadyExists,

    #[error("admin not found")]
    NotFound,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("password hashing failed")]
    Password(#[from] PasswordError),

    #[error("failed to issue session")]
    Session(#[from] SessionTokenError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AdminsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
