//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, SessionAuthService, SessionSecret, SessionTokenCodec},
    database::{self, Db},
    domain::{
        admins::{AdminsService, PgAdminsService},
        carts::{CartsService, PgCartsService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        reports::{PgReportsService, ReportsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub admins: Arc<dyn AdminsService>,
    pub users: Arc<dyn UsersService>,
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub carts: Arc<dyn CartsService>,
    pub reports: Arc<dyn ReportsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL and session signing key.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        max_connections: u32,
        session_secret: SessionSecret,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool), session_secret))
    }

    /// Wire every service onto an existing pool.
    #[must_use]
    pub fn from_db(db: Db, session_secret: SessionSecret) -> Self {
        let sessions = Arc::new(SessionTokenCodec::new(session_secret));

        Self {
            admins: Arc::new(PgAdminsService::new(db.clone(), Arc::clone(&sessions))),
            users: Arc::new(PgUsersService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            reports: Arc::new(PgReportsService::new(db)),
            auth: Arc::new(SessionAuthService::new(sessions)),
        }
    }
}
