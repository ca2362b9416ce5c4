use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::generate_haccp_plan::{__path_generate_haccp_plan, generate_haccp_plan};
use super::handlers::get_active_haccp_plan::{__path_get_active_haccp_plan, get_active_haccp_plan};
use super::handlers::get_haccp_plan::{__path_get_haccp_plan, get_haccp_plan};
use super::handlers::get_haccp_plan_document::{
    __path_get_haccp_plan_document, get_haccp_plan_document,
};
use super::handlers::get_location_haccp_plans::{
    __path_get_location_haccp_plans, get_location_haccp_plans,
};
use crate::application::http::server::app_state::{AppServices, AppState};

#[derive(OpenApi)]
#[openapi(paths(generate_haccp_plan, get_haccp_plan, get_haccp_plan_document))]
pub struct HaccpPlanApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_location_haccp_plans, get_active_haccp_plan))]
pub struct LocationHaccpPlanApiDoc;

pub fn haccp_plan_routes<S: AppServices>(state: AppState<S>) -> Router<AppState<S>> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/haccp-plans/generate", root_path),
            post(generate_haccp_plan::<S>),
        )
        .route(
            &format!("{}/haccp-plans/{{plan_id}}", root_path),
            get(get_haccp_plan::<S>),
        )
        .route(
            &format!("{}/haccp-plans/{{plan_id}}/document", root_path),
            get(get_haccp_plan_document::<S>),
        )
        .route(
            &format!("{}/locations/{{location_id}}/haccp-plans", root_path),
            get(get_location_haccp_plans::<S>),
        )
        .route(
            &format!("{}/locations/{{location_id}}/haccp-plans/active", root_path),
            get(get_active_haccp_plan::<S>),
        )
}
