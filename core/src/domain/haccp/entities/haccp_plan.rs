use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

pub const COMPLIANCE_STATUS_IMPLEMENTED: &str = "implemented";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HaccpPlan {
    pub id: Uuid,
    pub location_id: String,
    pub location_name: String,
    pub version: String,
    pub last_updated: DateTime<Utc>,
    pub verified_by: String,
    pub verified_date: NaiveDate,
    pub is_active: bool,
    pub scope: String,
    pub hazard_analysis_complete: bool,
    pub ccps_identified: i32,
    pub linked_menu_items: Vec<Uuid>,
    pub compliance_status: String,
    /// Full inspector-readable plan document.
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

pub struct HaccpPlanConfig {
    pub location_id: String,
    pub location_name: String,
    pub version: String,
    pub verified_by: String,
    pub generated_at: DateTime<Utc>,
    pub scope: String,
    pub ccps_identified: i32,
    pub linked_menu_items: Vec<Uuid>,
    pub notes: String,
}

impl HaccpPlan {
    /// A freshly generated plan is the active one for its location.
    pub fn new(config: HaccpPlanConfig) -> Self {
        Self {
            id: generate_uuid_v7(),
            location_id: config.location_id,
            location_name: config.location_name,
            version: config.version,
            last_updated: config.generated_at,
            verified_by: config.verified_by,
            verified_date: config.generated_at.date_naive(),
            is_active: true,
            scope: config.scope,
            hazard_analysis_complete: true,
            ccps_identified: config.ccps_identified,
            linked_menu_items: config.linked_menu_items,
            compliance_status: COMPLIANCE_STATUS_IMPLEMENTED.to_string(),
            notes: config.notes,
            created_at: config.generated_at,
        }
    }
}

pub fn plan_scope(menu_items: usize, ccps: usize, hazards: usize) -> String {
    format!(
        "HACCP plan covering {} menu items, {} critical control points and {} identified hazards",
        menu_items, ccps, hazards
    )
}
