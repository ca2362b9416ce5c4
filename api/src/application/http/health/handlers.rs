use axum::extract::State;
use galley_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppServices, AppState};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LivenessResponse {
    pub status: String,
}

pub async fn live() -> Response<LivenessResponse> {
    Response::OK(LivenessResponse {
        status: "alive".to_string(),
    })
}

pub async fn ready<S: AppServices>(
    State(state): State<AppState<S>>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    state.service.readness().await.map(Response::OK).map_err(|e| {
        warn!("readiness check failed: {}", e);
        ApiError::ServiceUnavailable("Database unavailable".to_string())
    })
}
