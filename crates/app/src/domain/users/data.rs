//! User Data

use crate::domain::users::records::UserUuid;

/// New User Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_num: String,
}
