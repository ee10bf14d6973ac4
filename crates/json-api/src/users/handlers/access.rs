//! User Access Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    errors::ApiError, extensions::*, state::State, users::errors::into_api_error,
    users::handlers::UserResponse,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AccessRequest {
    /// `true` blocks the user, `false` restores access
    pub blocked: bool,
}

/// User Access Handler
#[endpoint(
    tags("users"),
    summary = "Block or Unblock User",
    responses(
        (status_code = StatusCode::OK, description = "Access updated"),
        (status_code = StatusCode::NOT_FOUND, description = "User not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "users.access",
    skip(user, json, depot),
    fields(
        admin_email = tracing::field::Empty,
        user_uuid = tracing::field::Empty,
        blocked = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    user: PathParam<Uuid>,
    json: JsonBody<AccessRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let admin = depot.admin_email_or_401()?;
    let user = user.into_inner();
    let blocked = json.into_inner().blocked;

    let span = tracing::Span::current();

    span.record("admin_email", admin);
    span.record("user_uuid", tracing::field::display(user));
    span.record("blocked", blocked);

    let user = state
        .app
        .users
        .set_access(user.into(), blocked)
        .await
        .map_err(into_api_error)?;

    info!(user_uuid = %user.uuid, blocked, "user access changed");

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use maanushi_app::{
        context::AppContext,
        domain::users::{
            MockUsersService, UsersServiceError,
            records::{UserRecord, UserUuid},
        },
    };

    use crate::test_helpers::{admin_service, make_user, strict_context};

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        let app = AppContext {
            users: Arc::new(users),
            ..strict_context()
        };

        admin_service(app, Router::with_path("admin/users/{user}/access").put(handler))
    }

    fn mock_users() -> MockUsersService {
        let mut users = MockUsersService::new();

        users.expect_list_users().never();
        users.expect_get_user().never();
        users.expect_create_user().never();

        users
    }

    #[tokio::test]
    async fn test_block_user_returns_updated_user() -> TestResult {
        let uuid = UserUuid::new();
        let mut users = mock_users();

        users
            .expect_set_access()
            .once()
            .withf(move |u, blocked| *u == uuid && *blocked)
            .return_once(move |_, _| {
                Ok(UserRecord {
                    blocked: true,
                    ..make_user(uuid)
                })
            });

        let mut res = TestClient::put(format!("http://example.com/admin/users/{uuid}/access"))
            .json(&json!({ "blocked": true }))
            .send(&make_service(users))
            .await;

        let body: UserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.blocked, "expected user to be blocked");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_user_returns_404() -> TestResult {
        let uuid = UserUuid::new();
        let mut users = mock_users();

        users
            .expect_set_access()
            .once()
            .return_once(|_, _| Err(UsersServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/admin/users/{uuid}/access"))
            .json(&json!({ "blocked": false }))
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_blocked_flag_returns_400() -> TestResult {
        let uuid = UserUuid::new();
        let mut users = mock_users();

        users.expect_set_access().never();

        let res = TestClient::put(format!("http://example.com/admin/users/{uuid}/access"))
            .json(&json!({}))
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
