//! Dashboard Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use maanushi_app::domain::reports::records::DashboardRecord;

use crate::{errors::ApiError, extensions::*, reports::errors::into_api_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardResponse {
    /// Users that are not blocked
    pub active_users: u64,

    /// Users an admin has blocked
    pub blocked_users: u64,

    /// Products that have not been deleted
    pub products: u64,

    /// Order lines still pending
    pub pending_orders: u64,

    /// Order lines with an open return request
    pub return_requests: u64,
}

impl From<DashboardRecord> for DashboardResponse {
    fn from(record: DashboardRecord) -> Self {
        DashboardResponse {
            active_users: record.active_users,
            blocked_users: record.blocked_users,
            products: record.products,
            pending_orders: record.pending_orders,
            return_requests: record.return_requests,
        }
    }
}

/// Dashboard Handler
#[endpoint(tags("reports"), summary = "Admin Dashboard")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DashboardResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let dashboard = state
        .app
        .reports
        .dashboard()
        .await
        .map_err(into_api_error)?;

    Ok(Json(dashboard.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use maanushi_app::{
        context::AppContext,
        domain::reports::{MockReportsService, ReportsServiceError},
    };

    use crate::test_helpers::{admin_service, strict_context};

    use super::*;

    fn make_service(reports: MockReportsService) -> Service {
        let app = AppContext {
            reports: Arc::new(reports),
            ..strict_context()
        };

        admin_service(app, Router::with_path("admin/dashboard").get(handler))
    }

    #[tokio::test]
    async fn test_dashboard_returns_counts() -> TestResult {
        let mut reports = MockReportsService::new();

        reports.expect_dashboard().once().return_once(|| {
            Ok(DashboardRecord {
                active_users: 12,
                blocked_users: 1,
                products: 30,
                pending_orders: 4,
                return_requests: 2,
            })
        });

        reports.expect_sales_report().never();

        let mut res = TestClient::get("http://example.com/admin/dashboard")
            .send(&make_service(reports))
            .await;

        let body: DashboardResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.active_users, 12);
        assert_eq!(body.blocked_users, 1);
        assert_eq!(body.products, 30);
        assert_eq!(body.pending_orders, 4);
        assert_eq!(body.return_requests, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_dashboard_storage_failure_returns_500() -> TestResult {
        let mut reports = MockReportsService::new();

        reports
            .expect_dashboard()
            .once()
            .return_once(|| Err(ReportsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        reports.expect_sales_report().never();

        let res = TestClient::get("http://example.com/admin/dashboard")
            .send(&make_service(reports))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
