//! User Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_num: String,
    pub blocked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
