//! Admins service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    auth::{SessionTokenCodec, password},
    database::Db,
    domain::admins::{
        data::{AdminLogin, AdminSession, AdminSignUp, NewAdmin},
        errors::AdminsServiceError,
        records::{AdminRecord, AdminUuid},
        repository::PgAdminsRepository,
    },
    validation::{validate_email, validate_password, validate_phone},
};

#[derive(Debug, Clone)]
pub struct PgAdminsService {
    db: Db,
    repository: PgAdminsRepository,
    sessions: Arc<SessionTokenCodec>,
}

impl PgAdminsService {
    #[must_use]
    pub fn new(db: Db, sessions: Arc<SessionTokenCodec>) -> Self {
        Self {
            db,
            repository: PgAdminsRepository::new(),
            sessions,
        }
    }
}

#[async_trait]
impl AdminsService for PgAdminsService {
    async fn sign_up(&self, sign_up: AdminSignUp) -> Result<AdminRecord, AdminsServiceError> {
        let email = sign_up.email.trim();
        let phone_num = sign_up.phone_num.trim();

        validate_email(email)?;
        validate_phone(phone_num)?;
        validate_password(&sign_up.password)?;

        let mut tx = self.db.begin().await?;

        if self.repository.find_by_email(&mut tx, email).await?.is_some() {
            return Err(AdminsServiceError::AlreadyExists);
        }

        let password_hash = password::hash_password(&sign_up.password)?;

        let admin = self
            .repository
            .create_admin(
                &mut tx,
                &NewAdmin {
                    uuid: AdminUuid::new(),
                    email: email.to_string(),
                    password_hash,
                    phone_num: phone_num.to_string(),
                },
            )
            .await?;

        tx.commit().await?;

        info!(admin = %admin.uuid, "admin signed up");

        Ok(admin)
    }

    async fn login(&self, login: AdminLogin) -> Result<AdminSession, AdminsServiceError> {
        let mut tx = self.db.begin().await?;

        let admin = self
            .repository
            .find_by_email(&mut tx, login.email.trim())
            .await?;

        tx.commit().await?;

        let Some(admin) = admin else {
            warn!("login attempt for unknown admin");
            return Err(AdminsServiceError::InvalidCredentials);
        };

        if !password::verify_password(&login.password, &admin.password_hash)? {
            warn!(admin = %admin.uuid, "login attempt with wrong password");
            return Err(AdminsServiceError::InvalidCredentials);
        }

        let issued = self.sessions.issue(&admin.email, Timestamp::now())?;

        Ok(AdminSession {
            admin,
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<AdminRecord, AdminsServiceError> {
        let mut tx = self.db.begin().await?;

        let admin = self
            .repository
            .find_by_email(&mut tx, email)
            .await?
            .ok_or(AdminsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(admin)
    }
}

#[automock]
#[async_trait]
pub trait AdminsService: Send + Sync {
    /// Registers a new admin after validating email, phone and password.
    async fn sign_up(&self, sign_up: AdminSignUp) -> Result<AdminRecord, AdminsServiceError>;

    /// Checks credentials and issues a session token.
    async fn login(&self, login: AdminLogin) -> Result<AdminSession, AdminsServiceError>;

    /// Looks up an admin by email, ignoring case.
    async fn find_by_email(&self, email: &str) -> Result<AdminRecord, AdminsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{test::TestContext, validation::ValidationError};

    use super::*;

    fn sign_up(email: &str) -> AdminSignUp {
        AdminSignUp {
            email: email.to_string(),
            password: "correct horse battery".to_string(),
            phone_num: "9876543210".to_string(),
        }
    }

    #[tokio::test]
    async fn sign_up_stores_hashed_password() -> TestResult {
        let ctx = TestContext::new().await;

        let admin = ctx.admins.sign_up(sign_up("ops@maanushi.in")).await?;

        assert_eq!(admin.email, "ops@maanushi.in");
        assert_eq!(admin.phone_num, "9876543210");
        assert_ne!(admin.password_hash, "correct horse battery");
        assert!(admin.password_hash.starts_with("$argon2id$"));

        Ok(())
    }

    #[tokio::test]
    async fn sign_up_with_registered_email_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.admins.sign_up(sign_up("ops@maanushi.in")).await?;

        let result = ctx.admins.sign_up(sign_up("OPS@maanushi.in")).await;

        assert!(
            matches!(result, Err(AdminsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn sign_up_rejects_invalid_email() {
        let ctx = TestContext::new().await;

        let result = ctx.admins.sign_up(sign_up("not-an-email")).await;

        assert!(
            matches!(
                result,
                Err(AdminsServiceError::Validation(ValidationError::Email))
            ),
            "expected email validation error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn sign_up_rejects_invalid_phone() {
        let ctx = TestContext::new().await;

        let result = ctx
            .admins
            .sign_up(AdminSignUp {
                phone_num: "12345".to_string(),
                ..sign_up("ops@maanushi.in")
            })
            .await;

        assert!(
            matches!(
                result,
                Err(AdminsServiceError::Validation(ValidationError::Phone))
            ),
            "expected phone validation error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn login_issues_session_for_admin_email() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.admins.sign_up(sign_up("ops@maanushi.in")).await?;

        let session = ctx
            .admins
            .login(AdminLogin {
                email: "ops@maanushi.in".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await?;

        let claims = ctx.sessions.verify(&session.token, Timestamp::now())?;

        assert_eq!(claims.sub, "ops@maanushi.in");
        assert_eq!(session.admin.email, "ops@maanushi.in");
        assert!(session.expires_at > Timestamp::now());

        Ok(())
    }

    #[tokio::test]
    async fn login_with_wrong_password_returns_invalid_credentials() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.admins.sign_up(sign_up("ops@maanushi.in")).await?;

        let result = ctx
            .admins
            .login(AdminLogin {
                email: "ops@maanushi.in".to_string(),
                password: "wrong password".to_string(),
            })
            .await;

        assert!(
            matches!(result, Err(AdminsServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn login_with_unknown_email_returns_invalid_credentials() {
        let ctx = TestContext::new().await;

        let result = ctx
            .admins
            .login(AdminLogin {
                email: "nobody@maanushi.in".to_string(),
                password: "correct horse battery".to_string(),
            })
            .await;

        assert!(
            matches!(result, Err(AdminsServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {result:?}"
        );
    }

    #[tokio::test]
    async fn find_by_email_unknown_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.admins.find_by_email("nobody@maanushi.in").await;

        assert!(
            matches!(result, Err(AdminsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn admin_debug_redacts_password_hash() {
        let admin = AdminRecord {
            uuid: AdminUuid::new(),
            email: "ops@maanushi.in".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            phone_num: "9876543210".to_string(),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        };

        let debug = format!("{admin:?}");

        assert!(!debug.contains("secret"));
        assert!(debug.contains("redacted"));
    }
}
