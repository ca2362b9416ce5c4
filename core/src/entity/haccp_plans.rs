use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "haccp_plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub location_id: String,
    pub location_name: String,
    pub version: String,
    pub last_updated: DateTime,
    pub verified_by: String,
    pub verified_date: Date,
    pub is_active: bool,
    pub scope: String,
    pub hazard_analysis_complete: bool,
    pub ccps_identified: i32,
    /// JSON array of menu item ids.
    pub linked_menu_items: Json,
    pub compliance_status: String,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
