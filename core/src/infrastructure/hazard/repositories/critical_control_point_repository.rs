use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    hazard::{entities::CriticalControlPoint, ports::CriticalControlPointRepository},
};
use crate::entity::critical_control_points::{
    Column as CriticalControlPointColumn, Entity as CriticalControlPointEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresCriticalControlPointRepository {
    pub db: DatabaseConnection,
}

impl PostgresCriticalControlPointRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CriticalControlPointRepository for PostgresCriticalControlPointRepository {
    async fn fetch_recent(&self, limit: u64) -> Result<Vec<CriticalControlPoint>, CoreError> {
        let ccps = CriticalControlPointEntity::find()
            .order_by_desc(CriticalControlPointColumn::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch critical control points: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?
            .into_iter()
            .map(CriticalControlPoint::from)
            .collect();

        Ok(ccps)
    }
}
