use crate::domain::{
    asset::ports::AssetRepository,
    common::{entities::app_errors::CoreError, services::Service},
    haccp::ports::HaccpPlanRepository,
    hazard::ports::{CriticalControlPointRepository, HazardRepository},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    menu::ports::MenuItemRepository,
    operation_report::ports::OperationReportRepository,
};

impl<MI, CC, HZ, AS, HP, OR, HC> HealthCheckService for Service<MI, CC, HZ, AS, HP, OR, HC>
where
    MI: MenuItemRepository,
    CC: CriticalControlPointRepository,
    HZ: HazardRepository,
    AS: AssetRepository,
    HP: HaccpPlanRepository,
    OR: OperationReportRepository,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
