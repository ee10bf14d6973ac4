//! Reports Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{
        column_decode_error, try_get_amount, try_get_optional_amount, try_get_quantity,
    },
    domain::{
        orders::records::{OrderStatus, OrderUuid, PaymentMode},
        products::records::ProductDetailsUuid,
        reports::{
            data::SalesReportPeriod,
            records::{DashboardRecord, SalesRecord},
        },
        users::records::UserUuid,
    },
};

const DASHBOARD_SQL: &str = include_str!("sql/dashboard.sql");
const SALES_REPORT_SQL: &str = include_str!("sql/sales_report.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReportsRepository;

impl PgReportsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn dashboard(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<DashboardRecord, sqlx::Error> {
        let row = query(DASHBOARD_SQL)
            .bind(OrderStatus::Pending.code())
            .bind(OrderStatus::ReturnRequested.code())
            .fetch_one(&mut **tx)
            .await?;

        Ok(DashboardRecord {
            active_users: try_get_amount(&row, "active_users")?,
            blocked_users: try_get_amount(&row, "blocked_users")?,
            products: try_get_amount(&row, "products")?,
            pending_orders: try_get_amount(&row, "pending_orders")?,
            return_requests: try_get_amount(&row, "return_requests")?,
        })
    }

    pub(crate) async fn sales_report(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        period: SalesReportPeriod,
    ) -> Result<Vec<SalesRecord>, sqlx::Error> {
        query_as::<Postgres, SalesRecord>(SALES_REPORT_SQL)
            .bind(i32::from(period.year()))
            .bind(period.month().map(i32::from))
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for SalesRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let payment_mode = PaymentMode::try_from(row.try_get::<i16, _>("payment_mode_id")?)
            .map_err(|e| column_decode_error("payment_mode_id", e))?;

        let order_status = OrderStatus::try_from(row.try_get::<i16, _>("order_status_id")?)
            .map_err(|e| column_decode_error("order_status_id", e))?;

        Ok(Self {
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            first_name: row.try_get("first_name")?,
            email: row.try_get("email")?,
            product_details_uuid: ProductDetailsUuid::from_uuid(
                row.try_get("product_details_uuid")?,
            ),
            product_name: row.try_get("product_name")?,
            quantity: try_get_quantity(row, "quantity")?,
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            placed_at: row.try_get::<SqlxTimestamp, _>("placed_at")?.to_jiff(),
            payment_mode,
            price: try_get_amount(row, "price")?,
            discount_price: try_get_optional_amount(row, "discount_price")?,
            order_status,
        })
    }
}
