use crate::domain::{
    asset::ports::AssetRepository,
    haccp::ports::HaccpPlanRepository,
    hazard::ports::{CriticalControlPointRepository, HazardRepository},
    health::ports::HealthCheckRepository,
    menu::ports::MenuItemRepository,
    operation_report::ports::OperationReportRepository,
};

/// Aggregates every repository the business operations run against.
#[derive(Clone)]
pub struct Service<MI, CC, HZ, AS, HP, OR, HC>
where
    MI: MenuItemRepository,
    CC: CriticalControlPointRepository,
    HZ: HazardRepository,
    AS: AssetRepository,
    HP: HaccpPlanRepository,
    OR: OperationReportRepository,
    HC: HealthCheckRepository,
{
    pub(crate) menu_item_repository: MI,
    pub(crate) critical_control_point_repository: CC,
    pub(crate) hazard_repository: HZ,
    pub(crate) asset_repository: AS,
    pub(crate) haccp_plan_repository: HP,
    pub(crate) operation_report_repository: OR,
    pub(crate) health_check_repository: HC,
}

impl<MI, CC, HZ, AS, HP, OR, HC> Service<MI, CC, HZ, AS, HP, OR, HC>
where
    MI: MenuItemRepository,
    CC: CriticalControlPointRepository,
    HZ: HazardRepository,
    AS: AssetRepository,
    HP: HaccpPlanRepository,
    OR: OperationReportRepository,
    HC: HealthCheckRepository,
{
    pub fn new(
        menu_item_repository: MI,
        critical_control_point_repository: CC,
        hazard_repository: HZ,
        asset_repository: AS,
        haccp_plan_repository: HP,
        operation_report_repository: OR,
        health_check_repository: HC,
    ) -> Self {
        Self {
            menu_item_repository,
            critical_control_point_repository,
            hazard_repository,
            asset_repository,
            haccp_plan_repository,
            operation_report_repository,
            health_check_repository,
        }
    }
}
