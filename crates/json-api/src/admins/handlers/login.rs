//! Admin Login Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use maanushi_app::domain::admins::{AdminsServiceError, data::AdminLogin};

use crate::{
    admins::errors::into_api_error,
    auth::cookies::{session_cookie, session_token},
    errors::ApiError,
    extensions::*,
    observability::record_admin_login,
    state::State,
};

const HOME_PATH: &str = "/admin/home";

/// Admin Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<LoginRequest> for AdminLogin {
    fn from(request: LoginRequest) -> Self {
        AdminLogin {
            email: request.email,
            password: request.password,
        }
    }
}

/// Admin Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    /// Email of the signed-in admin
    pub email: String,

    /// When the `admin-token` cookie stops being accepted
    pub expires_at: String,
}

/// Admin Login Handler
///
/// Sets the `admin-token` cookie. Callers already holding a valid session are
/// redirected to the home page instead.
#[endpoint(
    tags("admins"),
    summary = "Admin Login",
    responses(
        (status_code = StatusCode::OK, description = "Logged in, cookie set"),
        (status_code = StatusCode::FOUND, description = "Already logged in"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid email or password"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "admins.login",
    skip(req, depot, res),
    fields(email = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    if let Some(token) = session_token(req)
        && state.app.auth.authenticate_session(&token).await.is_ok()
    {
        res.render(Redirect::found(HOME_PATH));

        return Ok(());
    }

    let login: LoginRequest = req
        .parse_json()
        .await
        .map_err(|error| ApiError::bad_request(format!("invalid login payload: {error}")))?;

    tracing::Span::current().record("email", login.email.as_str());

    let session = match state.app.admins.login(login.into()).await {
        Ok(session) => session,
        Err(error) => {
            if matches!(error, AdminsServiceError::InvalidCredentials) {
                record_admin_login("rejected");
                warn!("admin login rejected");
            } else {
                record_admin_login("error");
            }

            return Err(into_api_error(error));
        }
    };

    record_admin_login("success");

    info!(admin_uuid = %session.admin.uuid, "admin logged in");

    res.add_cookie(session_cookie(session.token, state.secure_cookies));
    res.render(Json(LoginResponse {
        email: session.admin.email,
        expires_at: session.expires_at.to_string(),
    }));

    Ok(())
}
