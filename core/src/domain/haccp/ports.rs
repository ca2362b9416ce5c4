use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    haccp::{
        entities::{GeneratePlanError, HaccpPlan},
        value_objects::{GeneratePlanInput, GeneratedPlan},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait HaccpPlanRepository: Send + Sync {
    /// Plans of a location, most recently created first.
    fn fetch_by_location(
        &self,
        location_id: String,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<HaccpPlan>, CoreError>> + Send;

    fn get_by_id(
        &self,
        plan_id: Uuid,
    ) -> impl Future<Output = Result<Option<HaccpPlan>, CoreError>> + Send;

    fn get_active_by_location(
        &self,
        location_id: String,
    ) -> impl Future<Output = Result<Option<HaccpPlan>, CoreError>> + Send;

    fn create_plan(
        &self,
        plan: HaccpPlan,
    ) -> impl Future<Output = Result<HaccpPlan, CoreError>> + Send;

    fn set_active(
        &self,
        plan_id: Uuid,
        is_active: bool,
    ) -> impl Future<Output = Result<HaccpPlan, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HaccpPlanService: Send + Sync {
    /// Generates a new plan version for a location, makes it the active
    /// plan and records a dashboard report for it.
    fn generate_plan(
        &self,
        input: GeneratePlanInput,
    ) -> impl Future<Output = Result<GeneratedPlan, GeneratePlanError>> + Send;

    fn get_plan(&self, plan_id: Uuid) -> impl Future<Output = Result<HaccpPlan, CoreError>> + Send;

    fn get_active_plan(
        &self,
        location_id: String,
    ) -> impl Future<Output = Result<HaccpPlan, CoreError>> + Send;

    fn get_plans(
        &self,
        location_id: String,
        limit: Option<u64>,
    ) -> impl Future<Output = Result<Vec<HaccpPlan>, CoreError>> + Send;
}
