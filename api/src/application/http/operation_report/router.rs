use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_operation_reports::{__path_get_operation_reports, get_operation_reports};
use crate::application::http::server::app_state::{AppServices, AppState};

#[derive(OpenApi)]
#[openapi(paths(get_operation_reports))]
pub struct OperationReportApiDoc;

pub fn operation_report_routes<S: AppServices>(state: AppState<S>) -> Router<AppState<S>> {
    Router::new().route(
        &format!("{}/operation-reports", state.args.server.root_path),
        get(get_operation_reports::<S>),
    )
}
