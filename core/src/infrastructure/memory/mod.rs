//! In-memory adapters for every repository port.
//!
//! Backs the unit and HTTP tests and lets the API run without Postgres.
//! Individual operations can be made to fail through [`FailPoint`].

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    asset::{entities::Asset, ports::AssetRepository},
    common::{entities::app_errors::CoreError, services::Service},
    haccp::{entities::HaccpPlan, ports::HaccpPlanRepository},
    hazard::{
        entities::{CriticalControlPoint, Hazard},
        ports::{CriticalControlPointRepository, HazardRepository},
    },
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    menu::{entities::MenuItem, ports::MenuItemRepository},
    operation_report::{
        entities::OperationReport, ports::OperationReportRepository,
        value_objects::GetOperationReportsFilter,
    },
};

pub type InMemoryService = Service<
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
    InMemoryStore,
>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailPoint {
    FetchMenuItems,
    FetchCriticalControlPoints,
    FetchHazards,
    FetchAssets,
    FetchPlans,
    CreatePlan,
    UpdatePlan,
    CreateReport,
    FetchReports,
    Health,
}

#[derive(Debug, Default)]
struct StoreState {
    menu_items: Vec<MenuItem>,
    ccps: Vec<CriticalControlPoint>,
    hazards: Vec<Hazard>,
    assets: Vec<Asset>,
    plans: Vec<HaccpPlan>,
    reports: Vec<OperationReport>,
    fail_points: HashSet<FailPoint>,
}

impl StoreState {
    fn check(&self, point: FailPoint) -> Result<(), CoreError> {
        if self.fail_points.contains(&point) {
            return Err(CoreError::DatabaseError("injected failure".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    pub fn service(&self) -> InMemoryService {
        Service::new(
            self.clone(),
            self.clone(),
            self.clone(),
            self.clone(),
            self.clone(),
            self.clone(),
            self.clone(),
        )
    }

    pub async fn fail_on(&self, point: FailPoint) {
        self.state.write().await.fail_points.insert(point);
    }

    pub async fn recover(&self, point: FailPoint) {
        self.state.write().await.fail_points.remove(&point);
    }

    pub async fn seed_menu_item(&self, item: MenuItem) {
        self.state.write().await.menu_items.push(item);
    }

    pub async fn seed_ccp(&self, ccp: CriticalControlPoint) {
        self.state.write().await.ccps.push(ccp);
    }

    pub async fn seed_hazard(&self, hazard: Hazard) {
        self.state.write().await.hazards.push(hazard);
    }

    pub async fn seed_asset(&self, asset: Asset) {
        self.state.write().await.assets.push(asset);
    }

    pub async fn seed_plan(&self, plan: HaccpPlan) {
        self.state.write().await.plans.push(plan);
    }

    pub async fn plans(&self) -> Vec<HaccpPlan> {
        self.state.read().await.plans.clone()
    }

    pub async fn reports(&self) -> Vec<OperationReport> {
        self.state.read().await.reports.clone()
    }
}

/// Newest first; records sharing a timestamp keep reverse insertion order.
fn most_recent<'a, T, I, K>(items: I, created_at: K, limit: u64) -> Vec<T>
where
    T: Clone + 'a,
    I: DoubleEndedIterator<Item = &'a T>,
    K: Fn(&T) -> DateTime<Utc>,
{
    let mut sorted: Vec<T> = items.rev().cloned().collect();
    sorted.sort_by_key(|item| std::cmp::Reverse(created_at(item)));
    sorted.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    sorted
}

impl MenuItemRepository for InMemoryStore {
    async fn fetch_recent(&self, limit: u64) -> Result<Vec<MenuItem>, CoreError> {
        let state = self.state.read().await;
        state.check(FailPoint::FetchMenuItems)?;
        Ok(most_recent(state.menu_items.iter(), |item| item.created_at, limit))
    }
}

impl CriticalControlPointRepository for InMemoryStore {
    async fn fetch_recent(&self, limit: u64) -> Result<Vec<CriticalControlPoint>, CoreError> {
        let state = self.state.read().await;
        state.check(FailPoint::FetchCriticalControlPoints)?;
        Ok(most_recent(state.ccps.iter(), |ccp| ccp.created_at, limit))
    }
}

impl HazardRepository for InMemoryStore {
    async fn fetch_recent(&self, limit: u64) -> Result<Vec<Hazard>, CoreError> {
        let state = self.state.read().await;
        state.check(FailPoint::FetchHazards)?;
        Ok(most_recent(state.hazards.iter(), |hazard| hazard.created_at, limit))
    }
}

impl AssetRepository for InMemoryStore {
    async fn fetch_recent(&self, limit: u64) -> Result<Vec<Asset>, CoreError> {
        let state = self.state.read().await;
        state.check(FailPoint::FetchAssets)?;
        Ok(most_recent(state.assets.iter(), |asset| asset.created_at, limit))
    }
}

impl HaccpPlanRepository for InMemoryStore {
    async fn fetch_by_location(
        &self,
        location_id: String,
        limit: u64,
    ) -> Result<Vec<HaccpPlan>, CoreError> {
        let state = self.state.read().await;
        state.check(FailPoint::FetchPlans)?;
        Ok(most_recent(
            state
                .plans
                .iter()
                .filter(|plan| plan.location_id == location_id),
            |plan| plan.created_at,
            limit,
        ))
    }

    async fn get_by_id(&self, plan_id: Uuid) -> Result<Option<HaccpPlan>, CoreError> {
        let state = self.state.read().await;
        Ok(state.plans.iter().find(|plan| plan.id == plan_id).cloned())
    }

    async fn get_active_by_location(
        &self,
        location_id: String,
    ) -> Result<Option<HaccpPlan>, CoreError> {
        let state = self.state.read().await;
        Ok(most_recent(
            state
                .plans
                .iter()
                .filter(|plan| plan.location_id == location_id && plan.is_active),
            |plan| plan.created_at,
            1,
        )
        .into_iter()
        .next())
    }

    async fn create_plan(&self, plan: HaccpPlan) -> Result<HaccpPlan, CoreError> {
        let mut state = self.state.write().await;
        state.check(FailPoint::CreatePlan)?;
        state.plans.push(plan.clone());
        Ok(plan)
    }

    async fn set_active(&self, plan_id: Uuid, is_active: bool) -> Result<HaccpPlan, CoreError> {
        let mut state = self.state.write().await;
        state.check(FailPoint::UpdatePlan)?;
        let plan = state
            .plans
            .iter_mut()
            .find(|plan| plan.id == plan_id)
            .ok_or(CoreError::NotFound)?;
        plan.is_active = is_active;
        plan.last_updated = Utc::now();
        Ok(plan.clone())
    }
}

impl OperationReportRepository for InMemoryStore {
    async fn create_report(&self, report: OperationReport) -> Result<OperationReport, CoreError> {
        let mut state = self.state.write().await;
        state.check(FailPoint::CreateReport)?;
        state.reports.push(report.clone());
        Ok(report)
    }

    async fn fetch_reports(
        &self,
        filter: GetOperationReportsFilter,
    ) -> Result<Vec<OperationReport>, CoreError> {
        let state = self.state.read().await;
        state.check(FailPoint::FetchReports)?;
        Ok(most_recent(
            state.reports.iter().filter(|report| {
                filter
                    .location_id
                    .as_ref()
                    .is_none_or(|location_id| &report.location_id == location_id)
                    && filter
                        .report_type
                        .as_ref()
                        .is_none_or(|report_type| &report.report_type == report_type)
            }),
            |report| report.timestamp,
            filter.effective_limit(),
        ))
    }
}

impl HealthCheckRepository for InMemoryStore {
    async fn health(&self) -> Result<u64, CoreError> {
        self.state.read().await.check(FailPoint::Health)?;
        Ok(0)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.state.read().await.check(FailPoint::Health)?;
        Ok(DatabaseHealthStatus {
            status: "ok".to_string(),
            database: "in-memory".to_string(),
            latency_ms: 0,
        })
    }
}
