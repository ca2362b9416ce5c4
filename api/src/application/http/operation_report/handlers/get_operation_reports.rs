use axum::extract::{Query, State};
use galley_core::domain::operation_report::{
    entities::OperationReport, ports::OperationReportService,
    value_objects::GetOperationReportsFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::operation_report::validators::GetOperationReportsQuery;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppServices, AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetOperationReportsResponse {
    pub data: Vec<OperationReport>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "operation-report",
    summary = "List operation reports",
    description = "Dashboard reports, most recent first, optionally narrowed to a location and a report type.",
    params(GetOperationReportsQuery),
    responses(
        (status = 200, body = GetOperationReportsResponse),
        (status = 400, body = ApiErrorResponse),
    ),
)]
pub async fn get_operation_reports<S: AppServices>(
    Query(query): Query<GetOperationReportsQuery>,
    State(state): State<AppState<S>>,
) -> Result<Response<GetOperationReportsResponse>, ApiError> {
    query.validate().map_err(ApiError::from)?;

    let reports = state
        .service
        .get_reports(GetOperationReportsFilter {
            location_id: query.location_id,
            report_type: query.report_type,
            limit: query.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetOperationReportsResponse { data: reports }))
}
