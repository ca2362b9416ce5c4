use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    operation_report::{
        entities::OperationReport, ports::OperationReportRepository,
        value_objects::GetOperationReportsFilter,
    },
};
use crate::entity::operation_reports::{
    ActiveModel as OperationReportActiveModel, Column as OperationReportColumn,
    Entity as OperationReportEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresOperationReportRepository {
    pub db: DatabaseConnection,
}

impl PostgresOperationReportRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl OperationReportRepository for PostgresOperationReportRepository {
    async fn create_report(&self, report: OperationReport) -> Result<OperationReport, CoreError> {
        let active_model = OperationReportActiveModel::try_from(report)?;

        let created_report = OperationReportEntity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map(OperationReport::from)
            .map_err(|e| {
                error!("Failed to create operation report: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?;

        Ok(created_report)
    }

    async fn fetch_reports(
        &self,
        filter: GetOperationReportsFilter,
    ) -> Result<Vec<OperationReport>, CoreError> {
        let limit = filter.effective_limit();
        let mut query = OperationReportEntity::find();

        if let Some(location_id) = filter.location_id {
            query = query.filter(OperationReportColumn::LocationId.eq(location_id));
        }

        if let Some(report_type) = filter.report_type {
            query = query.filter(OperationReportColumn::ReportType.eq(report_type));
        }

        let reports = query
            .order_by_desc(OperationReportColumn::Timestamp)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch operation reports: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?
            .into_iter()
            .map(OperationReport::from)
            .collect();

        Ok(reports)
    }
}
