//! Admin Data

use jiff::Timestamp;

use crate::domain::admins::records::{AdminRecord, AdminUuid};

/// Admin Sign-Up Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSignUp {
    pub email: String,
    pub password: String,
    pub phone_num: String,
}

/// Admin Login Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLogin {
    pub email: String,
    pub password: String,
}

/// Session handed out on a successful login.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin: AdminRecord,
    pub token: String,
    pub expires_at: Timestamp,
}

/// Hashed admin ready for insertion.
#[derive(Debug, Clone)]
pub(crate) struct NewAdmin {
    pub uuid: AdminUuid,
    pub email: String,
    pub password_hash: String,
    pub phone_num: String,
}
