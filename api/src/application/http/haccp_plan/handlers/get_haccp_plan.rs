use axum::extract::{Path, State};
use galley_core::domain::haccp::{entities::HaccpPlan, ports::HaccpPlanService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppServices, AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHaccpPlanResponse {
    pub data: HaccpPlan,
}

#[utoipa::path(
    get,
    path = "/{plan_id}",
    tag = "haccp-plan",
    summary = "Get HACCP plan",
    params(
        ("plan_id" = Uuid, Path, description = "Plan ID"),
    ),
    responses(
        (status = 200, body = GetHaccpPlanResponse),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn get_haccp_plan<S: AppServices>(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState<S>>,
) -> Result<Response<GetHaccpPlanResponse>, ApiError> {
    let plan = state
        .service
        .get_plan(plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetHaccpPlanResponse { data: plan }))
}
