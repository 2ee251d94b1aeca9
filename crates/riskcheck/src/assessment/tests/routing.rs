use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;

async fn get(router: &Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(
            Request::get(uri)
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes")
}

async fn post_json(router: &Router, uri: &str, body: Value) -> Response {
    router
        .clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&body).expect("body serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes")
}

fn uniform_body(assessment_id: &str, value: &str) -> Value {
    let answers: Vec<Value> = (1..=10)
        .map(|n| json!({ "question_id": format!("q{n}"), "value": value }))
        .collect();
    json!({ "assessment_id": assessment_id, "answers": answers })
}

#[tokio::test]
async fn questions_route_lists_catalog_modules() {
    let router = build_router(None);

    let response = get(&router, "/api/questions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    let modules = payload
        .get("modules")
        .and_then(Value::as_array)
        .expect("modules array");
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0].get("id"), Some(&json!("lite")));
}

#[tokio::test]
async fn unknown_module_route_returns_not_found() {
    let router = build_router(None);

    let response = get(&router, "/api/questions/mystery").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_submit_and_fetch_over_http() {
    let router = build_router(None);

    let response = post_json(&router, "/api/assessments", json!({ "modules": ["lite"] })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    let id = payload
        .get("id")
        .and_then(Value::as_str)
        .expect("assessment id")
        .to_string();

    let response = post_json(
        &router,
        "/api/assessments/submit",
        uniform_body(&id, "exposed"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("assessment_id"), Some(&json!(id)));
    assert_eq!(payload.get("risk_level"), Some(&json!("red")));
    assert_eq!(payload.get("total_score"), Some(&json!(60)));

    let response = get(&router, &format!("/api/assessments/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("status"), Some(&json!("submitted")));
}

#[tokio::test]
async fn resubmission_over_http_returns_conflict() {
    let router = build_router(None);

    let response = post_json(&router, "/api/assessments", json!({ "modules": ["lite"] })).await;
    let payload = read_json_body(response).await;
    let id = payload
        .get("id")
        .and_then(Value::as_str)
        .expect("assessment id")
        .to_string();

    let response = post_json(
        &router,
        "/api/assessments/submit",
        uniform_body(&id, "clear"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(
        &router,
        "/api/assessments/submit",
        uniform_body(&id, "exposed"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_answers_return_unprocessable_entity() {
    let router = build_router(None);

    let response = post_json(&router, "/api/assessments", json!({ "modules": ["lite"] })).await;
    let payload = read_json_body(response).await;
    let id = payload
        .get("id")
        .and_then(Value::as_str)
        .expect("assessment id")
        .to_string();

    let body = json!({
        "assessment_id": id,
        "answers": [{ "question_id": "q99", "value": "clear" }],
    });
    let response = post_json(&router, "/api/assessments/submit", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_assessment_returns_not_found() {
    let router = build_router(None);

    let response = get(&router, "/api/assessments/asmt-999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_routes_require_the_configured_key() {
    let router = build_router(Some("sesame"));

    let response = get(&router, "/api/admin/leads").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/admin/leads")
                .header("x-admin-key", "sesame")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    // Query parameter fallback for browser downloads.
    let response = get(&router, "/api/admin/leads?admin_key=sesame").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&router, "/api/admin/leads?admin_key=wrong").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unset_admin_key_leaves_the_gate_open() {
    let router = build_router(None);

    let response = get(&router, "/api/admin/leads").await;
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("leads"), Some(&json!([])));
}

#[tokio::test]
async fn lead_capture_and_export_round_trip() {
    let router = build_router(None);

    let lead = json!({
        "name": "Dana Smith",
        "email": "dana@example.com",
        "phone": "555-0100",
        "business_name": "Smith Electric",
        "state": "IA",
        "modules": ["lite"],
        "situation": "Two partners, no operating agreement",
    });
    let response = post_json(&router, "/api/leads", lead).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("success"), Some(&json!(true)));
    assert!(payload.get("lead_id").and_then(Value::as_str).is_some());

    let response = get(&router, "/api/admin/leads/export").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/csv")
    );
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok()),
        Some("attachment; filename=riskcheck_leads.csv")
    );

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let csv = String::from_utf8(body.to_vec()).expect("utf-8 export");
    assert!(csv.starts_with("name,email"));
    assert!(csv.contains("Smith Electric"));
}

#[tokio::test]
async fn lead_without_required_fields_is_rejected() {
    let router = build_router(None);

    let lead = json!({
        "name": "",
        "email": "dana@example.com",
        "phone": "",
        "business_name": "Smith Electric",
        "state": "",
        "modules": [],
        "situation": "",
    });
    let response = post_json(&router, "/api/leads", lead).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
