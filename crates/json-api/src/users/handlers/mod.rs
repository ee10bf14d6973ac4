//! User Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use maanushi_app::domain::users::records::UserRecord;

pub(crate) mod access;
pub(crate) mod index;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserResponse {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_num: String,

    /// Blocked users cannot sign in to the storefront
    pub blocked: bool,

    pub created_at: String,
    pub updated_at: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        UserResponse {
            uuid: user.uuid.into(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone_num: user.phone_num,
            blocked: user.blocked,
            created_at: user.created_at.to_string(),
            updated_at: user.updated_at.to_string(),
        }
    }
}
