use tracing::instrument;

use crate::domain::{
    asset::ports::AssetRepository,
    common::{entities::app_errors::CoreError, services::Service},
    haccp::ports::HaccpPlanRepository,
    hazard::ports::{CriticalControlPointRepository, HazardRepository},
    health::ports::HealthCheckRepository,
    menu::ports::MenuItemRepository,
    operation_report::{
        entities::OperationReport,
        ports::{OperationReportRepository, OperationReportService},
        value_objects::GetOperationReportsFilter,
    },
};

impl<MI, CC, HZ, AS, HP, OR, HC> OperationReportService for Service<MI, CC, HZ, AS, HP, OR, HC>
where
    MI: MenuItemRepository,
    CC: CriticalControlPointRepository,
    HZ: HazardRepository,
    AS: AssetRepository,
    HP: HaccpPlanRepository,
    OR: OperationReportRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_reports(
        &self,
        filter: GetOperationReportsFilter,
    ) -> Result<Vec<OperationReport>, CoreError> {
        let filter = GetOperationReportsFilter {
            limit: Some(filter.effective_limit()),
            ..filter
        };

        let reports = self.operation_report_repository.fetch_reports(filter).await?;

        tracing::debug!(count = reports.len(), "Listed operation reports");

        Ok(reports)
    }
}
