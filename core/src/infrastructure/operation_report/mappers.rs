use sea_orm::ActiveValue::Set;
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    operation_report::entities::{ChecklistItem, OperationReport},
};
use crate::entity::operation_reports::{
    ActiveModel as OperationReportActiveModel, Model as OperationReportModel,
};

impl From<OperationReportModel> for OperationReport {
    fn from(model: OperationReportModel) -> Self {
        let checklist_items: Vec<ChecklistItem> = serde_json::from_value(model.checklist_items)
            .unwrap_or_else(|e| {
                warn!(report_id = %model.id, "Ignoring unreadable checklist_items: {}", e);
                Vec::new()
            });

        OperationReport {
            id: model.id,
            report_id: model.report_id,
            report_type: model.report_type,
            location_id: model.location_id,
            staff_id: model.staff_id,
            staff_name: model.staff_name,
            staff_email: model.staff_email,
            report_date: model.report_date,
            completion_percentage: model.completion_percentage,
            status: model.status,
            source_entity_id: model.source_entity_id,
            source_entity_type: model.source_entity_type,
            timestamp: model.timestamp.and_utc(),
            checklist_items,
        }
    }
}

impl TryFrom<OperationReport> for OperationReportActiveModel {
    type Error = CoreError;

    fn try_from(report: OperationReport) -> Result<Self, Self::Error> {
        let checklist_items = serde_json::to_value(&report.checklist_items)
            .map_err(|e| CoreError::DatabaseError(e.to_string()))?;

        Ok(OperationReportActiveModel {
            id: Set(report.id),
            report_id: Set(report.report_id),
            report_type: Set(report.report_type),
            location_id: Set(report.location_id),
            staff_id: Set(report.staff_id),
            staff_name: Set(report.staff_name),
            staff_email: Set(report.staff_email),
            report_date: Set(report.report_date),
            completion_percentage: Set(report.completion_percentage),
            status: Set(report.status),
            source_entity_id: Set(report.source_entity_id),
            source_entity_type: Set(report.source_entity_type),
            timestamp: Set(report.timestamp.naive_utc()),
            checklist_items: Set(checklist_items),
        })
    }
}
