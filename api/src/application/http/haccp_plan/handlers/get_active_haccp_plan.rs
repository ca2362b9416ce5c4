use axum::extract::{Path, State};
use galley_core::domain::haccp::ports::HaccpPlanService;

use crate::application::http::haccp_plan::handlers::get_haccp_plan::GetHaccpPlanResponse;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppServices, AppState};

#[utoipa::path(
    get,
    path = "/{location_id}/haccp-plans/active",
    tag = "haccp-plan",
    summary = "Get active HACCP plan of a location",
    params(
        ("location_id" = String, Path, description = "Location ID"),
    ),
    responses(
        (status = 200, body = GetHaccpPlanResponse),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn get_active_haccp_plan<S: AppServices>(
    Path(location_id): Path<String>,
    State(state): State<AppState<S>>,
) -> Result<Response<GetHaccpPlanResponse>, ApiError> {
    let plan = state
        .service
        .get_active_plan(location_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHaccpPlanResponse { data: plan }))
}
