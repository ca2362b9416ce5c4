use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    hazard::{entities::Hazard, ports::HazardRepository},
};
use crate::entity::hazards::{Column as HazardColumn, Entity as HazardEntity};

#[derive(Debug, Clone)]
pub struct PostgresHazardRepository {
    pub db: DatabaseConnection,
}

impl PostgresHazardRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HazardRepository for PostgresHazardRepository {
    async fn fetch_recent(&self, limit: u64) -> Result<Vec<Hazard>, CoreError> {
        let hazards = HazardEntity::find()
            .order_by_desc(HazardColumn::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch hazards: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?
            .into_iter()
            .map(Hazard::from)
            .collect();

        Ok(hazards)
    }
}
