//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::{column_decode_error, try_get_quantity},
    domain::{
        orders::records::{
            OrderDetailRecord, OrderDetailUuid, OrderRecord, OrderStatus, OrderUuid, PaymentMode,
        },
        products::records::ProductDetailsUuid,
        users::records::UserUuid,
    },
    pagination::Page,
};

const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LIST_ORDER_DETAILS_SQL: &str = include_str!("sql/list_order_details.sql");
const UPDATE_ORDER_DETAIL_STATUS_SQL: &str = include_str!("sql/update_order_detail_status.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        page: Page,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        let mut orders = query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut **tx)
            .await?;

        let uuids: Vec<Uuid> = orders.iter().map(|o| o.uuid.into_uuid()).collect();

        for detail in self.list_order_details(tx, &uuids).await? {
            if let Some(order) = orders.iter_mut().find(|o| o.uuid == detail.order_uuid) {
                order.details.push(detail);
            }
        }

        Ok(orders)
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        let mut record = query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        record.details = self.list_order_details(tx, &[order.into_uuid()]).await?;

        Ok(record)
    }

    async fn list_order_details(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[Uuid],
    ) -> Result<Vec<OrderDetailRecord>, sqlx::Error> {
        query_as::<Postgres, OrderDetailRecord>(LIST_ORDER_DETAILS_SQL)
            .bind(orders)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_order_detail_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        detail: OrderDetailUuid,
        status: OrderStatus,
    ) -> Result<OrderDetailRecord, sqlx::Error> {
        query_as::<Postgres, OrderDetailRecord>(UPDATE_ORDER_DETAIL_STATUS_SQL)
            .bind(detail.into_uuid())
            .bind(status.code())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let payment_mode = PaymentMode::try_from(row.try_get::<i16, _>("payment_mode_id")?)
            .map_err(|e| column_decode_error("payment_mode_id", e))?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            payment_mode,
            placed_at: row.try_get::<SqlxTimestamp, _>("placed_at")?.to_jiff(),
            details: Vec::new(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderDetailRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status = OrderStatus::try_from(row.try_get::<i16, _>("order_status_id")?)
            .map_err(|e| column_decode_error("order_status_id", e))?;

        Ok(Self {
            uuid: OrderDetailUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            product_details_uuid: ProductDetailsUuid::from_uuid(
                row.try_get("product_details_uuid")?,
            ),
            quantity: try_get_quantity(row, "quantity")?,
            status,
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
