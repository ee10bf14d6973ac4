//! User Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use maanushi_app::pagination::Page;

use crate::{
    errors::ApiError, extensions::*, state::State, users::errors::into_api_error,
    users::handlers::UserResponse,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UsersResponse {
    /// The requested page of users
    pub users: Vec<UserResponse>,
}

/// User Index Handler
///
/// Pages through users, oldest first. `limit` is clamped to 1-100.
#[endpoint(tags("users"), summary = "List Users")]
pub(crate) async fn handler(
    limit: QueryParam<u32, false>,
    offset: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<UsersResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let page = Page::new(limit.into_inner(), offset.into_inner());

    let users = state
        .app
        .users
        .list_users(page)
        .await
        .map_err(into_api_error)?;

    Ok(Json(UsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use maanushi_app::{
        context::AppContext,
        domain::users::{MockUsersService, records::UserUuid},
    };

    use crate::test_helpers::{admin_service, make_user, strict_context};

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        let app = AppContext {
            users: Arc::new(users),
            ..strict_context()
        };

        admin_service(app, Router::with_path("admin/users").get(handler))
    }

    fn mock_users() -> MockUsersService {
        let mut users = MockUsersService::new();

        users.expect_get_user().never();
        users.expect_create_user().never();
        users.expect_set_access().never();

        users
    }

    #[tokio::test]
    async fn test_index_uses_default_page() -> TestResult {
        let uuid = UserUuid::new();
        let mut users = mock_users();

        users
            .expect_list_users()
            .once()
            .withf(|page| *page == Page::default())
            .return_once(move |_| Ok(vec![make_user(uuid)]));

        let mut res = TestClient::get("http://example.com/admin/users")
            .send(&make_service(users))
            .await;

        let body: UsersResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.users.iter().map(|user| user.uuid).collect::<Vec<_>>(),
            vec![uuid.into_uuid()]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_clamps_limit() -> TestResult {
        let mut users = mock_users();

        users
            .expect_list_users()
            .once()
            .withf(|page| page.limit() == 100 && page.offset() == 40)
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/admin/users?limit=500&offset=40")
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
