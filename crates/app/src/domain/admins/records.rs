//! Admin Records

use std::fmt;

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Admin UUID
pub type AdminUuid = TypedUuid<AdminRecord>;

/// Admin Record
#[derive(Clone)]
pub struct AdminRecord {
    pub uuid: AdminUuid,
    pub email: String,
    pub password_hash: String,
    pub phone_num: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Debug for AdminRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminRecord")
            .field("uuid", &self.uuid)
            .field("email", &self.email)
            .field("password_hash", &"**redacted**")
            .field("phone_num", &self.phone_num)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
