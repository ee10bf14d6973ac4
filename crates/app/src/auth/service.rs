//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::auth::{AuthServiceError, SessionTokenCodec};

/// Resolves admin session cookies to the admin they were issued for.
#[derive(Debug, Clone)]
pub struct SessionAuthService {
    codec: Arc<SessionTokenCodec>,
}

impl SessionAuthService {
    #[must_use]
    pub fn new(codec: Arc<SessionTokenCodec>) -> Self {
        Self { codec }
    }
}

#[async_trait]
impl AuthService for SessionAuthService {
    async fn authenticate_session(&self, token: &str) -> Result<String, AuthServiceError> {
        let claims = self.codec.verify(token, Timestamp::now())?;

        Ok(claims.sub)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify a session token and return the admin email it carries.
    async fn authenticate_session(&self, token: &str) -> Result<String, AuthServiceError>;
}
