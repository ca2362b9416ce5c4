mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use galley_api::application::http::haccp_plan::handlers::{
    generate_haccp_plan::GenerateHaccpPlanResponse, get_haccp_plan::GetHaccpPlanResponse,
    get_location_haccp_plans::GetHaccpPlansResponse,
};
use galley_api::application::http::server::api_entities::api_error::ApiErrorResponse;
use galley_core::domain::hazard::entities::CriticalControlPoint;
use galley_core::domain::menu::entities::MenuItem;
use galley_core::infrastructure::memory::{FailPoint, InMemoryStore};
use serde_json::json;

use common::test_server;

#[tokio::test]
async fn test_generate_plan_returns_success_envelope() {
    let store = InMemoryStore::default();
    store
        .seed_menu_item(MenuItem::new("Grilled chicken".to_string(), None))
        .await;
    let mut cooking = CriticalControlPoint::new("Cook chicken".to_string());
    cooking.critical_limit = Some("75".to_string());
    cooking.unit = Some("celsius".to_string());
    store.seed_ccp(cooking).await;

    let server = test_server(&store);
    let response = server
        .post("/haccp-plans/generate")
        .json(&json!({
            "user_email": "chef@kitchen.test",
            "location_id": "loc1",
            "location_name": "Downtown",
        }))
        .await;

    response.assert_status_ok();
    let body: GenerateHaccpPlanResponse = response.json();
    assert!(body.success);
    assert_eq!(body.version, "1.0");
    assert_eq!(body.message, "HACCP plan v1.0 generated for Downtown");

    let plans = store.plans().await;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, body.haccp_plan_id);
    assert_eq!(plans[0].ccps_identified, 1);

    let reports = store.reports().await;
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].id, body.report_id);
    assert_eq!(reports[0].source_entity_id, body.haccp_plan_id);
}

#[tokio::test]
async fn test_generate_plan_accepts_string_encoded_body() {
    let store = InMemoryStore::default();
    let server = test_server(&store);

    let encoded = json!(r#"{"user_email":"chef@kitchen.test"}"#);
    let response = server.post("/haccp-plans/generate").json(&encoded).await;

    response.assert_status_ok();
    let plans = store.plans().await;
    assert_eq!(plans[0].location_id, "default");
    assert_eq!(plans[0].location_name, "Main");
}

#[tokio::test]
async fn test_malformed_body_is_rejected_without_writes() {
    let store = InMemoryStore::default();
    let server = test_server(&store);

    let response = server
        .post("/haccp-plans/generate")
        .text("{not json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ApiErrorResponse = response.json();
    assert!(!body.success);
    assert_eq!(body.error, "Invalid request format");
    assert!(store.plans().await.is_empty());
    assert!(store.reports().await.is_empty());
}

#[tokio::test]
async fn test_missing_email_is_rejected_without_writes() {
    let store = InMemoryStore::default();
    let server = test_server(&store);

    let response = server
        .post("/haccp-plans/generate")
        .json(&json!({ "location_id": "loc1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ApiErrorResponse = response.json();
    assert_eq!(body.error, "Missing user_email");
    assert_eq!(body.details, None);
    assert!(store.plans().await.is_empty());
    assert!(store.reports().await.is_empty());
}

#[tokio::test]
async fn test_successive_generations_bump_version() {
    let store = InMemoryStore::default();
    let server = test_server(&store);
    let request = json!({ "user_email": "chef@kitchen.test", "location_id": "loc1" });

    let first: GenerateHaccpPlanResponse = server
        .post("/haccp-plans/generate")
        .json(&request)
        .await
        .json();
    let second: GenerateHaccpPlanResponse = server
        .post("/haccp-plans/generate")
        .json(&request)
        .await
        .json();

    assert_eq!(first.version, "1.0");
    assert_eq!(second.version, "1.1");
    assert_ne!(first.haccp_plan_id, second.haccp_plan_id);

    let active: GetHaccpPlanResponse = server
        .get("/locations/loc1/haccp-plans/active")
        .await
        .json();
    assert_eq!(active.data.id, second.haccp_plan_id);

    let archived: GetHaccpPlanResponse = server
        .get(&format!("/haccp-plans/{}", first.haccp_plan_id))
        .await
        .json();
    assert!(!archived.data.is_active);
}

#[tokio::test]
async fn test_plan_persistence_failure_returns_details() {
    let store = InMemoryStore::default();
    store.fail_on(FailPoint::CreatePlan).await;
    let server = test_server(&store);

    let response = server
        .post("/haccp-plans/generate")
        .json(&json!({ "user_email": "chef@kitchen.test" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: ApiErrorResponse = response.json();
    assert!(!body.success);
    assert_eq!(body.error, "Failed to generate HACCP plan");
    assert!(body.details.is_some());
    assert!(store.reports().await.is_empty());
}

#[tokio::test]
async fn test_failed_reads_still_generate_a_plan() {
    let store = InMemoryStore::default();
    store.fail_on(FailPoint::FetchMenuItems).await;
    store.fail_on(FailPoint::FetchHazards).await;
    let server = test_server(&store);

    let response = server
        .post("/haccp-plans/generate")
        .json(&json!({ "user_email": "chef@kitchen.test" }))
        .await;

    response.assert_status_ok();
    assert_eq!(store.plans().await.len(), 1);
}

#[tokio::test]
async fn test_plan_document_is_plain_text() {
    let store = InMemoryStore::default();
    let server = test_server(&store);

    let generated: GenerateHaccpPlanResponse = server
        .post("/haccp-plans/generate")
        .json(&json!({ "user_email": "chef@kitchen.test", "location_id": "loc1" }))
        .await
        .json();

    let response = server
        .get(&format!("/haccp-plans/{}/document", generated.haccp_plan_id))
        .await;

    response.assert_status_ok();
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
    let document = response.text();
    assert!(document.starts_with("1. BUSINESS INFORMATION"));
    assert!(document.contains("8. RECORD-KEEPING PROCEDURES"));
}

#[tokio::test]
async fn test_unknown_plan_is_not_found() {
    let store = InMemoryStore::default();
    let server = test_server(&store);

    let response = server
        .get("/haccp-plans/0192f0c4-0000-7000-8000-000000000000")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: ApiErrorResponse = response.json();
    assert!(!body.success);

    server
        .get("/locations/nowhere/haccp-plans/active")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_location_history_respects_limit() {
    let store = InMemoryStore::default();
    let server = test_server(&store);
    let request = json!({ "user_email": "chef@kitchen.test", "location_id": "loc1" });

    for _ in 0..3 {
        server
            .post("/haccp-plans/generate")
            .json(&request)
            .await
            .assert_status_ok();
    }

    let history: GetHaccpPlansResponse = server
        .get("/locations/loc1/haccp-plans")
        .add_query_param("limit", 2)
        .await
        .json();
    let versions: Vec<&str> = history.data.iter().map(|p| p.version.as_str()).collect();
    assert_eq!(versions, vec!["1.2", "1.1"]);

    let response = server
        .get("/locations/loc1/haccp-plans")
        .add_query_param("limit", 0)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ApiErrorResponse = response.json();
    assert_eq!(body.error, "limit must be between 1 and 100");
}

#[tokio::test]
async fn test_long_location_name_is_accepted() {
    let store = InMemoryStore::default();
    let server = test_server(&store);
    let location_name = "Harbourside Kitchen ".repeat(20).trim_end().to_string();

    let response = server
        .post("/haccp-plans/generate")
        .json(&json!({
            "user_email": "chef@kitchen.test",
            "location_id": "loc1",
            "location_name": location_name,
        }))
        .await;

    response.assert_status_ok();
    let body: GenerateHaccpPlanResponse = response.json();
    assert!(body.message.ends_with(&location_name));
    assert_eq!(store.plans().await[0].location_name, location_name);
}

#[tokio::test]
async fn test_oversized_body_gets_error_envelope() {
    let store = InMemoryStore::default();
    let server = test_server(&store);

    let response = server
        .post("/haccp-plans/generate")
        .bytes(Bytes::from(vec![b' '; 3 * 1024 * 1024]))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: ApiErrorResponse = response.json();
    assert!(!body.success);
    assert_eq!(body.error, "Request body too large");
    assert!(store.plans().await.is_empty());
}
