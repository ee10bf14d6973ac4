//! Admin Logout Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{auth::cookies::removal_cookie, errors::ApiError, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LogoutResponse {
    pub status: String,
}

/// Admin Logout Handler
///
/// Clears the session cookie. Tokens are not revoked server-side and stay
/// valid until they expire.
#[endpoint(tags("admins"), summary = "Admin Logout")]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<LogoutResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    res.add_cookie(removal_cookie(state.secure_cookies));

    Ok(Json(LogoutResponse {
        status: "logged_out".to_string(),
    }))
}
