//! Session middleware.

use std::sync::Arc;

use maanushi_app::auth::AuthServiceError;
use salvo::prelude::*;
use tracing::{debug, error};

use crate::{auth::cookies::session_token, errors::ApiError, extensions::*, state::State};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = session_token(req) else {
        res.render(ApiError::unauthorized("Unauthorized admin"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            error!("application state missing from depot");

            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let email = match state.app.auth.authenticate_session(&token).await {
        Ok(email) => email,
        Err(AuthServiceError::InvalidSession(reason)) => {
            debug!("rejected admin session: {reason}");

            res.render(ApiError::unauthorized("Unauthorized admin"));
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_admin_email(email);

    ctrl.call_next(req, depot, res).await;
}

#[cfg(test)]
mod tests {
    use maanushi_app::{
        auth::{MockAuthService, SessionTokenError},
        context::AppContext,
    };
    use salvo::{
        affix_state::inject,
        http::header::COOKIE,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::strict_context;

    use super::*;

    #[salvo::handler]
    async fn echo_admin(depot: &mut Depot, res: &mut Response) {
        let email = depot
            .admin_email_or_401()
            .map_or_else(|_| "missing".to_string(), ToString::to_string);

        res.render(email);
    }

    fn make_service(auth: MockAuthService) -> Service {
        let app = AppContext {
            auth: Arc::new(auth),
            ..strict_context()
        };

        let router = Router::new()
            .hoop(inject(State::from_app_context(app, false)))
            .hoop(handler)
            .push(Router::new().get(echo_admin));

        Service::new(router)
    }

    #[tokio::test]
    async fn test_missing_cookie_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_session().never();

        let res = TestClient::get("http://example.com")
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_cookie_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_session().never();

        let res = TestClient::get("http://example.com")
            .add_header(COOKIE, "admin-token=", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_expired_session_returns_401() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_session()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Err(SessionTokenError::Expired.into()));

        let res = TestClient::get("http://example.com")
            .add_header(COOKIE, "admin-token=abc123", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_valid_session_stores_admin_email() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_session()
            .once()
            .withf(|token| token == "abc123")
            .return_once(|_| Ok("ops@example.com".to_string()));

        let mut res = TestClient::get("http://example.com")
            .add_header(COOKIE, "admin-token=abc123", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "ops@example.com");

        Ok(())
    }
}
