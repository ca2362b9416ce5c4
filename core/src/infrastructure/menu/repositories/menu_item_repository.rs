use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::MenuItem, ports::MenuItemRepository},
};
use crate::entity::menu_items::{Column as MenuItemColumn, Entity as MenuItemEntity};

#[derive(Debug, Clone)]
pub struct PostgresMenuItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresMenuItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MenuItemRepository for PostgresMenuItemRepository {
    async fn fetch_recent(&self, limit: u64) -> Result<Vec<MenuItem>, CoreError> {
        let items = MenuItemEntity::find()
            .order_by_desc(MenuItemColumn::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch menu items: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?
            .into_iter()
            .map(MenuItem::from)
            .collect();

        Ok(items)
    }
}
