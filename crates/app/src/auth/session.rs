//! Signed, time-limited admin session tokens.
//!
//! Tokens are compact JWTs (`header.claims.signature`, base64url without
//! padding) signed with HMAC-SHA256. The subject is the admin's email.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD as B64};
use hmac::{Hmac, Mac};
use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::auth::SessionTokenError;

/// Fixed lifetime of an admin session.
pub const SESSION_TTL: SignedDuration = SignedDuration::from_mins(60);

/// Shortest accepted signing secret.
pub const MIN_SECRET_BYTES: usize = 32;

const ALGORITHM: &str = "HS256";

type HmacSha256 = Hmac<Sha256>;

/// HMAC key used to sign session tokens.
#[derive(Clone)]
pub struct SessionSecret {
    bytes: Vec<u8>,
}

impl SessionSecret {
    /// Wrap raw key material.
    ///
    /// # Errors
    ///
    /// Returns an error when the key is shorter than [`MIN_SECRET_BYTES`].
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, SessionTokenError> {
        let bytes = bytes.into();

        if bytes.len() < MIN_SECRET_BYTES {
            return Err(SessionTokenError::SecretTooShort {
                min: MIN_SECRET_BYTES,
            });
        }

        Ok(Self { bytes })
    }

    fn mac(&self) -> HmacSha256 {
        // HMAC accepts keys of any length.
        <HmacSha256 as Mac>::new_from_slice(&self.bytes)
            .unwrap_or_else(|_| unreachable!("hmac accepts keys of any length"))
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret(**redacted**)")
    }
}

impl Drop for SessionSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Admin email the session was issued to.
    pub sub: String,

    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,

    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,

    /// Unique token id.
    pub jti: Uuid,
}

/// A freshly minted token and the instant it stops being accepted.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Issues and verifies session tokens.
#[derive(Debug, Clone)]
pub struct SessionTokenCodec {
    secret: SessionSecret,
    ttl: SignedDuration,
}

impl SessionTokenCodec {
    #[must_use]
    pub fn new(secret: SessionSecret) -> Self {
        Self {
            secret,
            ttl: SESSION_TTL,
        }
    }

    #[must_use]
    pub fn ttl(&self) -> SignedDuration {
        self.ttl
    }

    /// Sign a token for `subject`, valid from `now` for the session lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error if the expiry overflows or the claims cannot be encoded.
    pub fn issue(&self, subject: &str, now: Timestamp) -> Result<IssuedSession, SessionTokenError> {
        let expires_at = now
            .checked_add(self.ttl)
            .map_err(SessionTokenError::ExpiryOutOfRange)?;

        let header = Header {
            alg: ALGORITHM.to_string(),
            typ: "JWT".to_string(),
        };

        let claims = SessionClaims {
            sub: subject.to_string(),
            iat: now.as_second(),
            exp: expires_at.as_second(),
            jti: Uuid::now_v7(),
        };

        let signing_input = format!("{}.{}", encode_segment(&header)?, encode_segment(&claims)?);

        let mut mac = self.secret.mac();
        mac.update(signing_input.as_bytes());

        let signature = B64.encode(mac.finalize().into_bytes());

        Ok(IssuedSession {
            token: format!("{signing_input}.{signature}"),
            expires_at,
        })
    }

    /// Check signature and expiry, returning the claims of a live token.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed, forged, or expired tokens.
    pub fn verify(&self, token: &str, now: Timestamp) -> Result<SessionClaims, SessionTokenError> {
        let (signing_input, signature) = token
            .rsplit_once('.')
            .ok_or(SessionTokenError::Malformed)?;

        let (header_segment, claims_segment) = signing_input
            .split_once('.')
            .ok_or(SessionTokenError::Malformed)?;

        let signature = B64
            .decode(signature)
            .map_err(|_| SessionTokenError::Malformed)?;

        let mut mac = self.secret.mac();
        mac.update(signing_input.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| SessionTokenError::BadSignature)?;

        let header: Header = decode_segment(header_segment)?;

        if header.alg != ALGORITHM {
            return Err(SessionTokenError::UnsupportedAlgorithm);
        }

        let claims: SessionClaims = decode_segment(claims_segment)?;

        if claims.exp <= now.as_second() {
            return Err(SessionTokenError::Expired);
        }

        Ok(claims)
    }
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String, SessionTokenError> {
    serde_json::to_vec(value)
        .map(|json| B64.encode(json))
        .map_err(SessionTokenError::Encoding)
}

fn decode_segment<T: for<'de> Deserialize<'de>>(segment: &str) -> Result<T, SessionTokenError> {
    let json = B64
        .decode(segment)
        .map_err(|_| SessionTokenError::Malformed)?;

    serde_json::from_slice(&json).map_err(|_| SessionTokenError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> SessionTokenCodec {
        SessionTokenCodec::new(
            SessionSecret::new(b"0123456789abcdef0123456789abcdef".to_vec())
                .expect("secret should be long enough"),
        )
    }

    fn at(raw: &str) -> Timestamp {
        raw.parse().expect("valid timestamp")
    }

    #[test]
    fn issued_token_verifies_with_subject() {
        let now = at("2026-03-01T10:00:00Z");
        let issued = codec().issue("admin@example.com", now).expect("issue");

        let claims = codec().verify(&issued.token, now).expect("verify");

        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.exp - claims.iat, 3_600);
        assert_eq!(issued.expires_at, at("2026-03-01T11:00:00Z"));
    }

    #[test]
    fn token_expires_after_sixty_minutes() {
        let now = at("2026-03-01T10:00:00Z");
        let issued = codec().issue("admin@example.com", now).expect("issue");

        let still_valid = codec().verify(&issued.token, at("2026-03-01T10:59:59Z"));
        let expired = codec().verify(&issued.token, at("2026-03-01T11:00:00Z"));

        assert!(still_valid.is_ok());
        assert!(
            matches!(expired, Err(SessionTokenError::Expired)),
            "expected Expired, got {expired:?}"
        );
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let now = at("2026-03-01T10:00:00Z");
        let issued = codec().issue("admin@example.com", now).expect("issue");

        let other = SessionTokenCodec::new(
            SessionSecret::new(vec![7_u8; 48]).expect("secret should be long enough"),
        );

        let result = other.verify(&issued.token, now);

        assert!(
            matches!(result, Err(SessionTokenError::BadSignature)),
            "expected BadSignature, got {result:?}"
        );
    }

    #[test]
    fn tampered_claims_are_rejected() {
        let now = at("2026-03-01T10:00:00Z");
        let issued = codec().issue("admin@example.com", now).expect("issue");

        let mut parts: Vec<&str> = issued.token.split('.').collect();
        let forged = encode_segment(&SessionClaims {
            sub: "intruder@example.com".to_string(),
            iat: now.as_second(),
            exp: now.as_second() + 3_600,
            jti: Uuid::nil(),
        })
        .expect("encode");
        parts[1] = &forged;

        let result = codec().verify(&parts.join("."), now);

        assert!(
            matches!(result, Err(SessionTokenError::BadSignature)),
            "expected BadSignature, got {result:?}"
        );
    }

    #[test]
    fn garbage_is_malformed() {
        let now = Timestamp::now();

        assert!(matches!(
            codec().verify("not-a-token", now),
            Err(SessionTokenError::Malformed)
        ));
        assert!(matches!(
            codec().verify("a.b.c", now),
            Err(SessionTokenError::Malformed)
        ));
    }

    #[test]
    fn short_secret_is_refused() {
        let result = SessionSecret::new(b"short".to_vec());

        assert!(matches!(
            result,
            Err(SessionTokenError::SecretTooShort { min: 32 })
        ));
    }
}
