pub mod handlers;

use axum::{Router, routing::get};

use crate::application::http::server::app_state::{AppServices, AppState};
use handlers::{live, ready};

pub fn health_routes<S: AppServices>(state: AppState<S>) -> Router<AppState<S>> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/health/live", root_path), get(live))
        .route(&format!("{}/health/ready", root_path), get(ready::<S>))
}
