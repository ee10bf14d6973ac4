//! Admin Home Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use maanushi_app::domain::admins::records::AdminRecord;

use crate::{admins::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Admin profile. Never includes the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminResponse {
    pub uuid: Uuid,
    pub email: String,
    pub phone_num: String,
    pub created_at: String,
}

impl From<AdminRecord> for AdminResponse {
    fn from(admin: AdminRecord) -> Self {
        AdminResponse {
            uuid: admin.uuid.into(),
            email: admin.email,
            phone_num: admin.phone_num,
            created_at: admin.created_at.to_string(),
        }
    }
}

/// Admin Home Handler
///
/// Returns the profile of the signed-in admin.
#[endpoint(tags("admins"), summary = "Admin Home")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AdminResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let email = depot.admin_email_or_401()?;

    let admin = state
        .app
        .admins
        .find_by_email(email)
        .await
        .map_err(into_api_error)?;

    Ok(Json(admin.into()))
}
