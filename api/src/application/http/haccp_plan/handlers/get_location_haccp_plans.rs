use axum::extract::{Path, Query, State};
use galley_core::domain::haccp::{entities::HaccpPlan, ports::HaccpPlanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::haccp_plan::validators::GetHaccpPlansQuery;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppServices, AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHaccpPlansResponse {
    pub data: Vec<HaccpPlan>,
}

#[utoipa::path(
    get,
    path = "/{location_id}/haccp-plans",
    tag = "haccp-plan",
    summary = "List HACCP plans of a location",
    description = "Plan history of a location, most recently generated first.",
    params(
        ("location_id" = String, Path, description = "Location ID"),
        GetHaccpPlansQuery
    ),
    responses(
        (status = 200, body = GetHaccpPlansResponse),
        (status = 400, body = ApiErrorResponse),
    ),
)]
pub async fn get_location_haccp_plans<S: AppServices>(
    Path(location_id): Path<String>,
    Query(query): Query<GetHaccpPlansQuery>,
    State(state): State<AppState<S>>,
) -> Result<Response<GetHaccpPlansResponse>, ApiError> {
    query.validate().map_err(ApiError::from)?;

    let plans = state
        .service
        .get_plans(location_id, query.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHaccpPlansResponse { data: plans }))
}
