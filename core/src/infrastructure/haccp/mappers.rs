use sea_orm::ActiveValue::Set;
use tracing::warn;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, haccp::entities::HaccpPlan};
use crate::entity::haccp_plans::{ActiveModel as HaccpPlanActiveModel, Model as HaccpPlanModel};

impl From<HaccpPlanModel> for HaccpPlan {
    fn from(model: HaccpPlanModel) -> Self {
        let linked_menu_items: Vec<Uuid> =
            serde_json::from_value(model.linked_menu_items).unwrap_or_else(|e| {
                warn!(plan_id = %model.id, "Ignoring unreadable linked_menu_items: {}", e);
                Vec::new()
            });

        HaccpPlan {
            id: model.id,
            location_id: model.location_id,
            location_name: model.location_name,
            version: model.version,
            last_updated: model.last_updated.and_utc(),
            verified_by: model.verified_by,
            verified_date: model.verified_date,
            is_active: model.is_active,
            scope: model.scope,
            hazard_analysis_complete: model.hazard_analysis_complete,
            ccps_identified: model.ccps_identified,
            linked_menu_items,
            compliance_status: model.compliance_status,
            notes: model.notes,
            created_at: model.created_at.and_utc(),
        }
    }
}

impl TryFrom<HaccpPlan> for HaccpPlanActiveModel {
    type Error = CoreError;

    fn try_from(plan: HaccpPlan) -> Result<Self, Self::Error> {
        let linked_menu_items = serde_json::to_value(&plan.linked_menu_items)
            .map_err(|e| CoreError::DatabaseError(e.to_string()))?;

        Ok(HaccpPlanActiveModel {
            id: Set(plan.id),
            location_id: Set(plan.location_id),
            location_name: Set(plan.location_name),
            version: Set(plan.version),
            last_updated: Set(plan.last_updated.naive_utc()),
            verified_by: Set(plan.verified_by),
            verified_date: Set(plan.verified_date),
            is_active: Set(plan.is_active),
            scope: Set(plan.scope),
            hazard_analysis_complete: Set(plan.hazard_analysis_complete),
            ccps_identified: Set(plan.ccps_identified),
            linked_menu_items: Set(linked_menu_items),
            compliance_status: Set(plan.compliance_status),
            notes: Set(plan.notes),
            created_at: Set(plan.created_at.naive_utc()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn model(linked_menu_items: serde_json::Value) -> HaccpPlanModel {
        let now = Utc::now();
        HaccpPlanModel {
            id: Uuid::nil(),
            location_id: "loc1".to_string(),
            location_name: "Downtown".to_string(),
            version: "2.4".to_string(),
            last_updated: now.naive_utc(),
            verified_by: "chef@x.com".to_string(),
            verified_date: now.date_naive(),
            is_active: true,
            scope: "scope".to_string(),
            hazard_analysis_complete: true,
            ccps_identified: 3,
            linked_menu_items,
            compliance_status: "implemented".to_string(),
            notes: "notes".to_string(),
            created_at: now.naive_utc(),
        }
    }

    #[test]
    fn test_linked_menu_items_are_decoded() {
        let id = Uuid::new_v4();
        let plan = HaccpPlan::from(model(json!([id])));

        assert_eq!(plan.linked_menu_items, vec![id]);
        assert_eq!(plan.version, "2.4");
    }

    #[test]
    fn test_unreadable_linked_menu_items_become_empty() {
        let plan = HaccpPlan::from(model(json!({"not": "a list"})));

        assert!(plan.linked_menu_items.is_empty());
    }
}
