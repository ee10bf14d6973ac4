//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;

use crate::errors::ApiError;

/// Depot key the session middleware stores the signed-in admin's email under.
pub(crate) const ADMIN_EMAIL_DEPOT_KEY: &str = "admin-email";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_admin_email(&mut self, email: String);

    fn admin_email_or_401(&self) -> Result<&str, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| ApiError::Internal)
    }

    fn insert_admin_email(&mut self, email: String) {
        self.insert(ADMIN_EMAIL_DEPOT_KEY, email);
    }

    fn admin_email_or_401(&self) -> Result<&str, ApiError> {
        self.get::<String>(ADMIN_EMAIL_DEPOT_KEY)
            .map(String::as_str)
            .map_err(|_ignored| ApiError::unauthorized("Unauthorized admin"))
    }
}
