//! Sales Report Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use maanushi_app::domain::reports::{data::SalesReportPeriod, records::SalesRecord};

use crate::{errors::ApiError, extensions::*, reports::errors::into_api_error, state::State};

/// One sold order line
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SalesRecordResponse {
    pub user_uuid: Uuid,
    pub first_name: String,
    pub email: String,
    pub product_details_uuid: Uuid,
    pub product_name: String,
    pub quantity: u32,
    pub order_uuid: Uuid,
    pub placed_at: String,
    pub payment_mode: String,

    /// Unit price in minor units
    pub price: u64,

    pub discount_price: Option<u64>,
    pub order_status: String,
}

impl From<SalesRecord> for SalesRecordResponse {
    fn from(record: SalesRecord) -> Self {
        SalesRecordResponse {
            user_uuid: record.user_uuid.into(),
            first_name: record.first_name,
            email: record.email,
            product_details_uuid: record.product_details_uuid.into(),
            product_name: record.product_name,
            quantity: record.quantity,
            order_uuid: record.order_uuid.into(),
            placed_at: record.placed_at.to_string(),
            payment_mode: record.payment_mode.as_str().to_string(),
            price: record.price,
            discount_price: record.discount_price,
            order_status: record.order_status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SalesReportResponse {
    pub sales: Vec<SalesRecordResponse>,
}

/// Sales Report Handler
///
/// Lists order lines placed in a calendar month (`frequency=MONTHLY`, needs
/// `month`) or year (`frequency=YEARLY`), most recent first.
#[endpoint(tags("reports"), summary = "Sales Report")]
#[tracing::instrument(name = "reports.sales", skip_all, err)]
pub(crate) async fn handler(
    frequency: QueryParam<String, true>,
    year: QueryParam<i16, true>,
    month: QueryParam<i8, false>,
    depot: &mut Depot,
) -> Result<Json<SalesReportResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let period = SalesReportPeriod::from_frequency(
        &frequency.into_inner(),
        year.into_inner(),
        month.into_inner(),
    )
    .map_err(into_api_error)?;

    let sales = state
        .app
        .reports
        .sales_report(period)
        .await
        .map_err(into_api_error)?;

    Ok(Json(SalesReportResponse {
        sales: sales.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use maanushi_app::{
        context::AppContext,
        domain::{
            orders::records::{OrderStatus, OrderUuid, PaymentMode},
            products::records::ProductDetailsUuid,
            reports::MockReportsService,
            users::records::UserUuid,
        },
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{admin_service, strict_context},
    };

    use super::*;

    fn make_service(reports: MockReportsService) -> Service {
        let app = AppContext {
            reports: Arc::new(reports),
            ..strict_context()
        };

        admin_service(app, Router::with_path("admin/sales-report").get(handler))
    }

    fn make_sale() -> SalesRecord {
        SalesRecord {
            user_uuid: UserUuid::new(),
            first_name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            product_details_uuid: ProductDetailsUuid::new(),
            product_name: "Neem Soap".to_string(),
            quantity: 2,
            order_uuid: OrderUuid::new(),
            placed_at: Timestamp::UNIX_EPOCH,
            payment_mode: PaymentMode::Cod,
            price: 120,
            discount_price: Some(100),
            order_status: OrderStatus::Delivered,
        }
    }

    #[tokio::test]
    async fn test_monthly_report_returns_sales() -> TestResult {
        let mut reports = MockReportsService::new();

        reports
            .expect_sales_report()
            .once()
            .withf(|period| {
                *period
                    == SalesReportPeriod::Monthly {
                        year: 2026,
                        month: 3,
                    }
            })
            .return_once(|_| Ok(vec![make_sale()]));

        reports.expect_dashboard().never();

        let mut res = TestClient::get(
            "http://example.com/admin/sales-report?frequency=MONTHLY&year=2026&month=3",
        )
        .send(&make_service(reports))
        .await;

        let body: SalesReportResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.sales.len(), 1);
        assert_eq!(body.sales.first().map(|s| s.payment_mode.as_str()), Some("COD"));
        assert_eq!(
            body.sales.first().map(|s| s.order_status.as_str()),
            Some("delivered")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_yearly_report_ignores_month() -> TestResult {
        let mut reports = MockReportsService::new();

        reports
            .expect_sales_report()
            .once()
            .withf(|period| *period == SalesReportPeriod::Yearly { year: 2025 })
            .return_once(|_| Ok(vec![]));

        reports.expect_dashboard().never();

        let res = TestClient::get("http://example.com/admin/sales-report?frequency=YEARLY&year=2025")
            .send(&make_service(reports))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_month_out_of_range_returns_400() -> TestResult {
        let mut reports = MockReportsService::new();

        reports.expect_sales_report().never();
        reports.expect_dashboard().never();

        let mut res = TestClient::get(
            "http://example.com/admin/sales-report?frequency=MONTHLY&year=2026&month=13",
        )
        .send(&make_service(reports))
        .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "month must be between 1 and 12");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_frequency_returns_400() -> TestResult {
        let mut reports = MockReportsService::new();

        reports.expect_sales_report().never();
        reports.expect_dashboard().never();

        let res = TestClient::get("http://example.com/admin/sales-report?frequency=WEEKLY&year=2026")
            .send(&make_service(reports))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
