use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItem {
    pub item_id: String,
    pub item_name: String,
    pub answer: String,
}

impl ChecklistItem {
    pub fn new(item_id: &str, item_name: &str, answer: impl Into<String>) -> Self {
        Self {
            item_id: item_id.to_string(),
            item_name: item_name.to_string(),
            answer: answer.into(),
        }
    }
}

/// Dashboard summary of a completed operation such as a checklist run
/// or a generated food-safety plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperationReport {
    pub id: Uuid,
    pub report_id: String,
    pub report_type: String,
    pub location_id: String,
    pub staff_id: String,
    pub staff_name: String,
    pub staff_email: String,
    pub report_date: NaiveDate,
    pub completion_percentage: i32,
    pub status: String,
    pub source_entity_id: Uuid,
    pub source_entity_type: String,
    pub timestamp: DateTime<Utc>,
    pub checklist_items: Vec<ChecklistItem>,
}

pub struct OperationReportConfig {
    pub report_id: String,
    pub report_type: String,
    pub location_id: String,
    pub staff_email: String,
    pub completion_percentage: i32,
    pub status: String,
    pub source_entity_id: Uuid,
    pub source_entity_type: String,
    pub timestamp: DateTime<Utc>,
    pub checklist_items: Vec<ChecklistItem>,
}

impl OperationReport {
    pub fn new(config: OperationReportConfig) -> Self {
        Self {
            id: generate_uuid_v7(),
            report_id: config.report_id,
            report_type: config.report_type,
            location_id: config.location_id,
            staff_id: config.staff_email.clone(),
            staff_name: staff_name_from_email(&config.staff_email),
            staff_email: config.staff_email,
            report_date: config.timestamp.date_naive(),
            completion_percentage: config.completion_percentage,
            status: config.status,
            source_entity_id: config.source_entity_id,
            source_entity_type: config.source_entity_type,
            timestamp: config.timestamp,
            checklist_items: config.checklist_items,
        }
    }
}

/// Display name derived from the local part of an email address.
pub fn staff_name_from_email(email: &str) -> String {
    email
        .split_once('@')
        .map(|(local, _)| local)
        .unwrap_or(email)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_name_from_email() {
        assert_eq!(staff_name_from_email("chef@x.com"), "chef");
        assert_eq!(staff_name_from_email("no-domain"), "no-domain");
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = OperationReport::new(OperationReportConfig {
            report_id: "HACCP-1.0-1".to_string(),
            report_type: "HACCP".to_string(),
            location_id: "loc1".to_string(),
            staff_email: "chef@x.com".to_string(),
            completion_percentage: 100,
            status: "completed".to_string(),
            source_entity_id: Uuid::nil(),
            source_entity_type: "HACCPPlan".to_string(),
            timestamp: Utc::now(),
            checklist_items: vec![ChecklistItem::new("version", "Plan Version", "1.0")],
        });

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["reportType"], "HACCP");
        assert_eq!(value["staffName"], "chef");
        assert_eq!(value["sourceEntityType"], "HACCPPlan");
        assert_eq!(value["checklistItems"][0]["item_id"], "version");
    }
}
