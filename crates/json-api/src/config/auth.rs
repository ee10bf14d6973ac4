//! Auth Config

use clap::Args;
use maanushi_app::auth::{SessionSecret, SessionTokenError};

/// Admin session settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Key used to sign admin session tokens (at least 32 bytes)
    #[arg(long, env = "SESSION_SECRET", hide_env_values = true)]
    pub session_secret: String,

    /// Mark the `admin-token` cookie as `Secure`
    #[arg(long, env = "SESSION_COOKIE_SECURE", default_value_t = false)]
    pub session_cookie_secure: bool,
}

impl AuthConfig {
    /// Turn the configured key into a session signing secret.
    ///
    /// # Errors
    ///
    /// Returns an error when the key is shorter than the minimum length.
    pub fn session_secret(&self) -> Result<SessionSecret, SessionTokenError> {
        SessionSecret::new(self.session_secret.as_bytes())
    }
}
