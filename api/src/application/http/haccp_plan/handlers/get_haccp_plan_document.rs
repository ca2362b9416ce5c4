use axum::{
    extract::{Path, State},
    http::header,
};
use galley_core::domain::haccp::ports::HaccpPlanService;
use uuid::Uuid;

use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::app_state::{AppServices, AppState};

type DocumentResponse = ([(header::HeaderName, String); 2], String);

#[utoipa::path(
    get,
    path = "/{plan_id}/document",
    tag = "haccp-plan",
    summary = "Download HACCP plan document",
    description = "Returns the inspector-readable plan document as plain text.",
    params(
        ("plan_id" = Uuid, Path, description = "Plan ID"),
    ),
    responses(
        (status = 200, content_type = "text/plain", body = String),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn get_haccp_plan_document<S: AppServices>(
    Path(plan_id): Path<Uuid>,
    State(state): State<AppState<S>>,
) -> Result<DocumentResponse, ApiError> {
    let plan = state
        .service
        .get_plan(plan_id)
        .await
        .map_err(ApiError::from)?;

    let filename = document_filename(&plan.location_id, &plan.version);

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        plan.notes,
    ))
}

fn document_filename(location_id: &str, version: &str) -> String {
    let location: String = location_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("haccp-plan-{}-v{}.txt", location, version)
}
