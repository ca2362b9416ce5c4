use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "operation_reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub report_id: String,
    pub report_type: String,
    pub location_id: String,
    pub staff_id: String,
    pub staff_name: String,
    pub staff_email: String,
    pub report_date: Date,
    pub completion_percentage: i32,
    pub status: String,
    pub source_entity_id: Uuid,
    pub source_entity_type: String,
    pub timestamp: DateTime,
    /// JSON array of `{item_id, item_name, answer}` objects.
    pub checklist_items: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
