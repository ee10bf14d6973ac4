//! Authentication

mod errors;
pub mod password;
mod service;
pub mod session;

pub use errors::*;
pub use service::*;
pub use session::{IssuedSession, SESSION_TTL, SessionClaims, SessionSecret, SessionTokenCodec};
