mod common;

use axum::http::StatusCode;
use galley_api::application::http::operation_report::handlers::get_operation_reports::GetOperationReportsResponse;
use galley_core::infrastructure::memory::{FailPoint, InMemoryStore};
use serde_json::json;

use common::test_server;

#[tokio::test]
async fn test_reports_are_filtered_by_location() {
    let store = InMemoryStore::default();
    let server = test_server(&store);

    for location_id in ["loc1", "loc2"] {
        server
            .post("/haccp-plans/generate")
            .json(&json!({ "user_email": "sam@kitchen.test", "location_id": location_id }))
            .await
            .assert_status_ok();
    }

    let reports: GetOperationReportsResponse = server
        .get("/operation-reports")
        .add_query_param("location_id", "loc2")
        .add_query_param("report_type", "HACCP")
        .await
        .json();

    assert_eq!(reports.data.len(), 1);
    let report = &reports.data[0];
    assert_eq!(report.location_id, "loc2");
    assert_eq!(report.staff_name, "sam");
    assert_eq!(report.completion_percentage, 100);
    assert_eq!(report.checklist_items.len(), 3);
}

#[tokio::test]
async fn test_report_limit_is_validated() {
    let store = InMemoryStore::default();
    let server = test_server(&store);

    server
        .get("/operation-reports")
        .add_query_param("limit", 101)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_report_store_failure_is_internal_error() {
    let store = InMemoryStore::default();
    store.fail_on(FailPoint::FetchReports).await;
    let server = test_server(&store);

    server
        .get("/operation-reports")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
