use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use galley_core::domain::haccp::{
    ports::HaccpPlanService,
    value_objects::{GeneratePlanRequest, GeneratedPlan},
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::haccp_plan::validators::GenerateHaccpPlanValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppServices, AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateHaccpPlanResponse {
    pub success: bool,
    pub haccp_plan_id: Uuid,
    pub report_id: Uuid,
    pub version: String,
    pub message: String,
}

impl From<GeneratedPlan> for GenerateHaccpPlanResponse {
    fn from(generated: GeneratedPlan) -> Self {
        Self {
            success: true,
            message: generated.message(),
            haccp_plan_id: generated.plan.id,
            report_id: generated.report.id,
            version: generated.plan.version,
        }
    }
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "haccp-plan",
    summary = "Generate HACCP plan",
    description = "Builds a new plan version for a location from its menu items, critical control points and hazards. The new plan becomes the active one and earlier plans of the location are archived. The body may also be sent JSON-encoded as a string.",
    request_body = GenerateHaccpPlanValidator,
    responses(
        (status = 200, body = GenerateHaccpPlanResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 413, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn generate_haccp_plan<S: AppServices>(
    State(state): State<AppState<S>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response<GenerateHaccpPlanResponse>, ApiError> {
    let body = body.map_err(ApiError::from)?;
    let input = GeneratePlanRequest::parse(&body).map_err(ApiError::from)?;

    let generated = state
        .service
        .generate_plan(input)
        .await
        .map_err(ApiError::from)?;

    for warning in &generated.warnings {
        warn!(plan_id = %generated.plan.id, "plan generated with degraded data: {}", warning);
    }

    Ok(Response::OK(GenerateHaccpPlanResponse::from(generated)))
}
