use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    haccp::{entities::HaccpPlan, ports::HaccpPlanRepository},
};
use crate::entity::haccp_plans::{
    ActiveModel as HaccpPlanActiveModel, Column as HaccpPlanColumn, Entity as HaccpPlanEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresHaccpPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresHaccpPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HaccpPlanRepository for PostgresHaccpPlanRepository {
    async fn fetch_by_location(
        &self,
        location_id: String,
        limit: u64,
    ) -> Result<Vec<HaccpPlan>, CoreError> {
        let plans = HaccpPlanEntity::find()
            .filter(HaccpPlanColumn::LocationId.eq(location_id))
            .order_by_desc(HaccpPlanColumn::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch HACCP plans by location: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?
            .into_iter()
            .map(HaccpPlan::from)
            .collect();

        Ok(plans)
    }

    async fn get_by_id(&self, plan_id: Uuid) -> Result<Option<HaccpPlan>, CoreError> {
        let plan = HaccpPlanEntity::find_by_id(plan_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get HACCP plan by id: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?
            .map(HaccpPlan::from);

        Ok(plan)
    }

    async fn get_active_by_location(
        &self,
        location_id: String,
    ) -> Result<Option<HaccpPlan>, CoreError> {
        let plan = HaccpPlanEntity::find()
            .filter(HaccpPlanColumn::LocationId.eq(location_id))
            .filter(HaccpPlanColumn::IsActive.eq(true))
            .order_by_desc(HaccpPlanColumn::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get active HACCP plan: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?
            .map(HaccpPlan::from);

        Ok(plan)
    }

    async fn create_plan(&self, plan: HaccpPlan) -> Result<HaccpPlan, CoreError> {
        let active_model = HaccpPlanActiveModel::try_from(plan)?;

        let created_plan = HaccpPlanEntity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map(HaccpPlan::from)
            .map_err(|e| {
                error!("Failed to create HACCP plan: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?;

        Ok(created_plan)
    }

    async fn set_active(&self, plan_id: Uuid, is_active: bool) -> Result<HaccpPlan, CoreError> {
        let updated_plan = HaccpPlanEntity::update(HaccpPlanActiveModel {
            id: Set(plan_id),
            is_active: Set(is_active),
            last_updated: Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        .map(HaccpPlan::from)
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => CoreError::NotFound,
            e => {
                error!("Failed to update HACCP plan: {}", e);
                CoreError::DatabaseError(e.to_string())
            }
        })?;

        Ok(updated_plan)
    }
}
