use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use tracing::error;

use crate::domain::{
    asset::{entities::Asset, ports::AssetRepository},
    common::entities::app_errors::CoreError,
};
use crate::entity::assets::{Column as AssetColumn, Entity as AssetEntity};

#[derive(Debug, Clone)]
pub struct PostgresAssetRepository {
    pub db: DatabaseConnection,
}

impl PostgresAssetRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AssetRepository for PostgresAssetRepository {
    async fn fetch_recent(&self, limit: u64) -> Result<Vec<Asset>, CoreError> {
        let assets = AssetEntity::find()
            .order_by_desc(AssetColumn::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch assets: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?
            .into_iter()
            .map(Asset::from)
            .collect();

        Ok(assets)
    }
}
