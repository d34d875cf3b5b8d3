use std::sync::Arc;

use apptrack_backend::storage::MemoryStore;
use apptrack_backend::{routes, AppState};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn test_app() -> Router {
    let app_state = AppState::new(Arc::new(MemoryStore::new()));
    routes::api_router().with_state(app_state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn create_returns_record_with_defaults() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({"company_name": "Acme", "position": "Engineer"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["company_name"], "Acme");
    assert_eq!(body["position"], "Engineer");
    assert_eq!(body["status"], "Applied");
    assert_eq!(body["notes"], "");
    assert!(body["application_date"].is_string());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn create_and_get_round_trip() {
    let app = test_app();

    let (_, created) = send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({
            "company_name": "Acme",
            "position": "Engineer",
            "status": "Offer",
            "application_date": "2024-01-15",
            "notes": "via referral"
        })),
    )
    .await;

    let (status, fetched) = send(
        &app,
        "GET",
        &format!("/api/applications/{}", created["id"]),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_rejects_missing_required_fields() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/api/applications", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    let details = body["details"].as_array().unwrap();
    assert!(details.contains(&json!("Company name is required")));
    assert!(details.contains(&json!("Position is required")));
}

#[tokio::test]
async fn create_rejects_bogus_status_naming_valid_set() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({"company_name": "Acme", "position": "Engineer", "status": "Bogus"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_array().unwrap();
    let message = details[0].as_str().unwrap();
    for valid in [
        "Applied",
        "Interview",
        "Phone Screen",
        "On-site",
        "Rejected",
        "Offer",
        "Accepted",
        "Withdrawn",
    ] {
        assert!(message.contains(valid), "missing {} in {}", valid, message);
    }
}

#[tokio::test]
async fn create_rejects_unparsable_application_date() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({
            "company_name": "Acme",
            "position": "Engineer",
            "application_date": "next tuesday"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_array().unwrap();
    assert!(details[0].as_str().unwrap().contains("ISO format"));
}

#[tokio::test]
async fn create_with_non_json_body_is_rejected() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/applications")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Request body must be JSON");
}

#[tokio::test]
async fn update_status_leaves_other_fields_untouched() {
    let app = test_app();

    let (_, created) = send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({"company_name": "Acme", "position": "Engineer"})),
    )
    .await;

    let (status, updated) = send(
        &app,
        "PUT",
        "/api/applications/1",
        Some(json!({"status": "Interview"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "Interview");
    assert_eq!(updated["company_name"], created["company_name"]);
    assert_eq!(updated["position"], created["position"]);
    assert_eq!(updated["application_date"], created["application_date"]);
    assert_eq!(updated["notes"], created["notes"]);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn update_with_explicit_null_fields_is_rejected() {
    let app = test_app();

    send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({"company_name": "Acme", "position": "Engineer"})),
    )
    .await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/applications/1",
        Some(json!({"status": null})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    let details = body["details"].as_array().unwrap();
    assert!(details[0].as_str().unwrap().starts_with("Status must be one of:"));

    let (status, body) = send(
        &app,
        "PUT",
        "/api/applications/1",
        Some(json!({"company_name": null})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]
        .as_array()
        .unwrap()
        .contains(&json!("Company name is required")));

    // The record keeps its original values.
    let (_, fetched) = send(&app, "GET", "/api/applications/1", None).await;
    assert_eq!(fetched["status"], "Applied");
    assert_eq!(fetched["company_name"], "Acme");
}

#[tokio::test]
async fn create_with_explicit_null_date_stores_null() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({
            "company_name": "Acme",
            "position": "Engineer",
            "application_date": null
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["application_date"].is_null());
}

#[tokio::test]
async fn non_numeric_id_returns_json_404() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/applications/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint not found");

    let (status, body) = send(&app, "DELETE", "/api/applications/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn update_missing_record_returns_404() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "PUT",
        "/api/applications/999",
        Some(json!({"status": "Interview"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Job application not found");
}

#[tokio::test]
async fn get_missing_record_returns_404() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/applications/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Job application not found");
}

#[tokio::test]
async fn delete_then_get_returns_404() {
    let app = test_app();

    send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({"company_name": "Acme", "position": "Engineer"})),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/api/applications/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job application deleted successfully");

    let (status, _) = send(&app, "GET", "/api/applications/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, "DELETE", "/api/applications/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Job application not found");
}

#[tokio::test]
async fn list_returns_all_with_total() {
    let app = test_app();

    for company in ["Acme", "Globex", "Initech"] {
        send(
            &app,
            "POST",
            "/api/applications",
            Some(json!({"company_name": company, "position": "Engineer"})),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/api/applications", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    let applications = body["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 3);
    assert!(body.get("filtered_by").is_none());
}

#[tokio::test]
async fn list_filtered_by_status_is_exact() {
    let app = test_app();

    send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({"company_name": "Acme", "position": "Engineer"})),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({"company_name": "Globex", "position": "Engineer", "status": "Interview"})),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/applications?status=Interview", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filtered_by"], "Interview");
    let applications = body["applications"].as_array().unwrap();
    assert_eq!(body["total"], applications.len() as i64);
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["company_name"], "Globex");
}

#[tokio::test]
async fn list_with_invalid_filter_returns_400() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/applications?status=Bogus", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid status filter"));
}

#[tokio::test]
async fn ids_are_never_reused_after_delete() {
    let app = test_app();

    for _ in 0..2 {
        send(
            &app,
            "POST",
            "/api/applications",
            Some(json!({"company_name": "Acme", "position": "Engineer"})),
        )
        .await;
    }
    send(&app, "DELETE", "/api/applications/2", None).await;

    let (_, created) = send(
        &app,
        "POST",
        "/api/applications",
        Some(json!({"company_name": "Globex", "position": "Engineer"})),
    )
    .await;
    assert_eq!(created["id"], 3);
}

#[tokio::test]
async fn status_options_lists_all_eight() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/status-options", None).await;

    assert_eq!(status, StatusCode::OK);
    let statuses = body["statuses"].as_array().unwrap();
    assert_eq!(statuses.len(), 8);
    assert_eq!(statuses[0], "Applied");
    assert_eq!(statuses[7], "Withdrawn");
}

#[tokio::test]
async fn health_reports_service_name() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "apptrack-backend");
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/api/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Endpoint not found");
}

#[tokio::test]
async fn wrong_method_returns_json_405() {
    let app = test_app();

    let (status, body) = send(&app, "PATCH", "/api/applications", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}
