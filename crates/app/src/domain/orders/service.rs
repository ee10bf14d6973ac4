//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        records::{OrderDetailRecord, OrderDetailUuid, OrderRecord, OrderStatus, OrderUuid},
        repository::PgOrdersRepository,
    },
    pagination::Page,
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn list_orders(&self, page: Page) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx, page).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.repository.get_order(&mut tx, order).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn update_order_status(
        &self,
        detail: OrderDetailUuid,
        status: OrderStatus,
    ) -> Result<OrderDetailRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_order_detail_status(&mut tx, detail, status)
            .await?;

        tx.commit().await?;

        info!(order_detail = %detail, %status, "order status changed");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Lists orders with their details, most recently placed first.
    async fn list_orders(&self, page: Page) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieve a single order with its details.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Moves one order line to a new status.
    async fn update_order_status(
        &self,
        detail: OrderDetailUuid,
        status: OrderStatus,
    ) -> Result<OrderDetailRecord, OrdersServiceError>;
}
