//! Reports service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::reports::{
        data::SalesReportPeriod,
        errors::ReportsServiceError,
        records::{DashboardRecord, SalesRecord},
        repository::PgReportsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgReportsService {
    db: Db,
    repository: PgReportsRepository,
}

impl PgReportsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReportsRepository::new(),
        }
    }
}

#[async_trait]
impl ReportsService for PgReportsService {
    async fn dashboard(&self) -> Result<DashboardRecord, ReportsServiceError> {
        let mut tx = self.db.begin().await?;

        let dashboard = self.repository.dashboard(&mut tx).await?;

        tx.commit().await?;

        Ok(dashboard)
    }

    #[tracing::instrument(name = "reports.service.sales_report", skip(self), err)]
    async fn sales_report(
        &self,
        period: SalesReportPeriod,
    ) -> Result<Vec<SalesRecord>, ReportsServiceError> {
        period.validate()?;

        let mut tx = self.db.begin().await?;

        let records = self.repository.sales_report(&mut tx, period).await?;

        tx.commit().await?;

        Ok(records)
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// Counts shown on the admin dashboard.
    async fn dashboard(&self) -> Result<DashboardRecord, ReportsServiceError>;

    /// Order lines placed within `period`, most recent first.
    async fn sales_report(
        &self,
        period: SalesReportPeriod,
    ) -> Result<Vec<SalesRecord>, ReportsServiceError>;
}
