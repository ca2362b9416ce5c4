use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    asset::ports::AssetRepository,
    common::{entities::app_errors::CoreError, services::Service},
    haccp::{
        document::{DocumentContext, HaccpDocument},
        entities::{
            DataSource, GeneratePlanError, HaccpPlan, HaccpPlanConfig, PlanVersion, plan_scope,
        },
        helpers::{archive_plans, fetch_or_default},
        ports::{HaccpPlanRepository, HaccpPlanService},
        value_objects::{
            ASSET_FETCH_LIMIT, CCP_FETCH_LIMIT, EXISTING_PLAN_FETCH_LIMIT, GeneratePlanInput,
            GeneratedPlan, HAZARD_FETCH_LIMIT, LINKED_MENU_ITEM_LIMIT, MENU_ITEM_FETCH_LIMIT,
            plan_history_limit,
        },
    },
    hazard::ports::{CriticalControlPointRepository, HazardRepository},
    health::ports::HealthCheckRepository,
    menu::ports::MenuItemRepository,
    operation_report::{
        entities::{ChecklistItem, OperationReport, OperationReportConfig},
        ports::OperationReportRepository,
    },
};

pub const HACCP_REPORT_TYPE: &str = "HACCP";
pub const HACCP_PLAN_ENTITY_TYPE: &str = "HACCPPlan";

impl<MI, CC, HZ, AS, HP, OR, HC> HaccpPlanService for Service<MI, CC, HZ, AS, HP, OR, HC>
where
    MI: MenuItemRepository,
    CC: CriticalControlPointRepository,
    HZ: HazardRepository,
    AS: AssetRepository,
    HP: HaccpPlanRepository,
    OR: OperationReportRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self), fields(location_id = %input.location_id))]
    async fn generate_plan(
        &self,
        input: GeneratePlanInput,
    ) -> Result<GeneratedPlan, GeneratePlanError> {
        let mut warnings = Vec::new();

        // 1. Read everything the plan is built from; a failed read counts as empty
        let menu_items = fetch_or_default(
            DataSource::MenuItems,
            self.menu_item_repository.fetch_recent(MENU_ITEM_FETCH_LIMIT),
            &mut warnings,
        )
        .await;
        let ccps = fetch_or_default(
            DataSource::CriticalControlPoints,
            self.critical_control_point_repository
                .fetch_recent(CCP_FETCH_LIMIT),
            &mut warnings,
        )
        .await;
        let hazards = fetch_or_default(
            DataSource::Hazards,
            self.hazard_repository.fetch_recent(HAZARD_FETCH_LIMIT),
            &mut warnings,
        )
        .await;
        let assets = fetch_or_default(
            DataSource::Assets,
            self.asset_repository.fetch_recent(ASSET_FETCH_LIMIT),
            &mut warnings,
        )
        .await;
        let existing_plans = fetch_or_default(
            DataSource::ExistingPlans,
            self.haccp_plan_repository
                .fetch_by_location(input.location_id.clone(), EXISTING_PLAN_FETCH_LIMIT),
            &mut warnings,
        )
        .await;

        tracing::debug!(
            menu_items = menu_items.len(),
            ccps = ccps.len(),
            hazards = hazards.len(),
            assets = assets.len(),
            existing_plans = existing_plans.len(),
            "Collected HACCP plan inputs"
        );

        // 2. Next version
        let version =
            PlanVersion::following(existing_plans.first().map(|plan| plan.version.as_str()))?
                .to_string();

        // 3. Document
        let generated_at = Utc::now();
        let notes = HaccpDocument::assemble(&DocumentContext {
            location_name: &input.location_name,
            location_id: &input.location_id,
            version: &version,
            generated_at,
            menu_item_count: menu_items.len(),
            ccps: &ccps,
            hazards: &hazards,
        })
        .render();

        // 4. Archive predecessors; not atomic with the creation below
        warnings.extend(archive_plans(&self.haccp_plan_repository, &existing_plans).await);

        // 5. New active plan
        let linked_menu_items: Vec<Uuid> = menu_items
            .iter()
            .take(LINKED_MENU_ITEM_LIMIT)
            .map(|item| item.id)
            .collect();

        let plan = HaccpPlan::new(HaccpPlanConfig {
            location_id: input.location_id.clone(),
            location_name: input.location_name.clone(),
            version: version.clone(),
            verified_by: input.user_email.clone(),
            generated_at,
            scope: plan_scope(menu_items.len(), ccps.len(), hazards.len()),
            ccps_identified: ccps.len() as i32,
            linked_menu_items,
            notes,
        });

        let plan = self
            .haccp_plan_repository
            .create_plan(plan)
            .await
            .map_err(|source| GeneratePlanError::Persistence {
                entity: "HACCP plan",
                source,
            })?;

        // 6. Dashboard report
        let report = OperationReport::new(OperationReportConfig {
            report_id: format!(
                "{}-{}-{}",
                HACCP_REPORT_TYPE,
                version,
                generated_at.timestamp_millis()
            ),
            report_type: HACCP_REPORT_TYPE.to_string(),
            location_id: input.location_id.clone(),
            staff_email: input.user_email.clone(),
            completion_percentage: 100,
            status: "completed".to_string(),
            source_entity_id: plan.id,
            source_entity_type: HACCP_PLAN_ENTITY_TYPE.to_string(),
            timestamp: generated_at,
            checklist_items: vec![
                ChecklistItem::new("version", "Plan Version", version.clone()),
                ChecklistItem::new(
                    "ccps",
                    "Critical Control Points Identified",
                    format!("{} CCPs", plan.ccps_identified),
                ),
                ChecklistItem::new("hazard_analysis", "Hazard Analysis Complete", "Yes"),
            ],
        });

        let report = self
            .operation_report_repository
            .create_report(report)
            .await
            .map_err(|source| GeneratePlanError::Persistence {
                entity: "operation report",
                source,
            })?;

        if !warnings.is_empty() {
            warn!(
                plan_id = %plan.id,
                warnings = warnings.len(),
                "HACCP plan generated with incomplete data"
            );
        }

        info!(
            plan_id = %plan.id,
            report_id = %report.id,
            version = %plan.version,
            archived = existing_plans.len(),
            "HACCP plan generated"
        );

        Ok(GeneratedPlan {
            plan,
            report,
            warnings,
        })
    }

    #[instrument(skip(self))]
    async fn get_plan(&self, plan_id: Uuid) -> Result<HaccpPlan, CoreError> {
        self.haccp_plan_repository
            .get_by_id(plan_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_active_plan(&self, location_id: String) -> Result<HaccpPlan, CoreError> {
        self.haccp_plan_repository
            .get_active_by_location(location_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn get_plans(
        &self,
        location_id: String,
        limit: Option<u64>,
    ) -> Result<Vec<HaccpPlan>, CoreError> {
        self.haccp_plan_repository
            .fetch_by_location(location_id, plan_history_limit(limit))
            .await
    }
}
