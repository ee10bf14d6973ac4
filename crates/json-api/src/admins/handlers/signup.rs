//! Admin Sign Up Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use maanushi_app::domain::admins::data::AdminSignUp;

use crate::{admins::errors::into_api_error, errors::ApiError, extensions::*, state::State};

/// Admin Sign Up Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SignUpRequest {
    /// Login email, unique across admins
    pub email: String,

    /// Plain-text password, at least 8 characters
    pub password: String,

    /// 10 digit phone number, optionally prefixed with `+` and a country code
    pub phone_num: String,
}

impl From<SignUpRequest> for AdminSignUp {
    fn from(request: SignUpRequest) -> Self {
        AdminSignUp {
            email: request.email,
            password: request.password,
            phone_num: request.phone_num,
        }
    }
}

/// Admin Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AdminCreatedResponse {
    /// Created admin UUID
    pub uuid: Uuid,
}

/// Admin Sign Up Handler
#[endpoint(
    tags("admins"),
    summary = "Admin Sign Up",
    responses(
        (status_code = StatusCode::CREATED, description = "Admin created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid email, phone or password"),
        (status_code = StatusCode::CONFLICT, description = "Email already registered"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "admins.signup",
    skip(json, depot, res),
    fields(admin_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<SignUpRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AdminCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let admin = state
        .app
        .admins
        .sign_up(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("admin_uuid", tracing::field::display(admin.uuid));

    info!(admin_uuid = %admin.uuid, "admin signed up");

    res.status_code(StatusCode::CREATED);

    Ok(Json(AdminCreatedResponse {
        uuid: admin.uuid.into(),
    }))
}
