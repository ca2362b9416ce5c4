mod common;

use axum::http::StatusCode;
use galley_core::infrastructure::memory::{FailPoint, InMemoryStore};

use common::test_server;

#[tokio::test]
async fn test_liveness() {
    let store = InMemoryStore::default();
    let server = test_server(&store);

    server.get("/health/live").await.assert_status_ok();
}

#[tokio::test]
async fn test_readiness_follows_database() {
    let store = InMemoryStore::default();
    let server = test_server(&store);

    server.get("/health/ready").await.assert_status_ok();

    store.fail_on(FailPoint::Health).await;
    server
        .get("/health/ready")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
