use crate::{
    domain::common::{GalleyConfig, services::Service},
    infrastructure::{
        asset::PostgresAssetRepository,
        db::postgres::{Postgres, PostgresConfig},
        haccp::PostgresHaccpPlanRepository,
        hazard::{PostgresCriticalControlPointRepository, PostgresHazardRepository},
        health::PostgresHealthCheckRepository,
        menu::PostgresMenuItemRepository,
        operation_report::PostgresOperationReportRepository,
    },
};

pub type GalleyService = Service<
    PostgresMenuItemRepository,
    PostgresCriticalControlPointRepository,
    PostgresHazardRepository,
    PostgresAssetRepository,
    PostgresHaccpPlanRepository,
    PostgresOperationReportRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: GalleyConfig) -> Result<GalleyService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    Ok(Service::new(
        PostgresMenuItemRepository::new(postgres.get_db()),
        PostgresCriticalControlPointRepository::new(postgres.get_db()),
        PostgresHazardRepository::new(postgres.get_db()),
        PostgresAssetRepository::new(postgres.get_db()),
        PostgresHaccpPlanRepository::new(postgres.get_db()),
        PostgresOperationReportRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
    ))
}
