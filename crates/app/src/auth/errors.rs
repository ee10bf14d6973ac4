//! Auth errors.

use thiserror::Error;

/// Failures while minting or checking a session token.
#[derive(Debug, Error)]
pub enum SessionTokenError {
    #[error("session secret must be at least {min} bytes")]
    SecretTooShort { min: usize },

    #[error("session token is malformed")]
    Malformed,

    #[error("session token uses an unsupported algorithm")]
    UnsupportedAlgorithm,

    #[error("session token signature does not match")]
    BadSignature,

    #[error("session token has expired")]
    Expired,

    #[error("session expiry is out of range")]
    ExpiryOutOfRange(#[source] jiff::Error),

    #[error("failed to encode session claims")]
    Encoding(#[source] serde_json::Error),
}

/// Failures while hashing or verifying a password.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(argon2::password_hash::Error),

    #[error("stored password hash is unreadable: {0}")]
    StoredHash(argon2::password_hash::Error),
}

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid session")]
    InvalidSession(#[from] SessionTokenError),
}
