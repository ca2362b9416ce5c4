use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use galley_api::application::http::server::{app_state::AppState, http_server::router};
use galley_api::args::Args;
use galley_core::infrastructure::memory::InMemoryStore;

pub fn test_server(store: &InMemoryStore) -> TestServer {
    let args = Args::parse_from(["galley-api", "--disable-metrics", "--root-path", ""]);
    let state = AppState::new(Arc::new(args), store.service());

    TestServer::new(router(state).unwrap()).unwrap()
}
