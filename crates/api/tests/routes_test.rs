//! End-to-end route tests against a migrated temp-file SQLite database.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use samses_api::{create_router, AppState};
use samses_db::migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;

async fn test_app() -> (axum::Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("samses_api_test.sqlite");
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let db = Database::connect(&url)
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let app = create_router(AppState { db: Arc::new(db) });
    (app, dir)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _guard) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/api/v1/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_school_create_and_detail_flow() {
    let (app, _guard) = test_app().await;

    let created = app
        .clone()
        .oneshot(post_json(
            "/api/v1/schools",
            &json!({
                "name": "Government Day Secondary School Pantami",
                "school_type": "public",
                "program": "jss",
                "lga": "Gombe",
                "ward": "Pantami",
                "street_address": "Pantami Road",
                "phone": "08012345678"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let school = body_json(created).await;
    assert_eq!(school["registration_number"], "1001");

    // An ongoing session scoped to public jss schools governs it.
    let session = app
        .clone()
        .oneshot(post_json(
            "/api/v1/academic-sessions",
            &json!({
                "scope": "public",
                "program": "jss",
                "session_name": "2026/2027",
                "status": "ongoing",
                "start_date": "2026-01-01",
                "end_date": "2026-12-31"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(session.status(), StatusCode::CREATED);

    let detail = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/schools/{}", school["id"].as_str().unwrap()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(detail.status(), StatusCode::OK);
    let body = body_json(detail).await;
    assert_eq!(body["current_session"]["session_name"], "2026/2027");
    // No accreditation or suspension on file yet.
    assert_eq!(body["status"], "-");
}

#[tokio::test]
async fn test_school_payload_validation_is_field_scoped() {
    let (app, _guard) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/v1/schools",
            &json!({
                "name": "",
                "school_type": "public",
                "program": "jss",
                "lga": "Gombe",
                "ward": "Pantami",
                "street_address": "Pantami Road",
                "phone": "08012345678"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["fields"][0]["field"], "name");
}

#[tokio::test]
async fn test_complete_ongoing_redirects_to_referer_and_is_idempotent() {
    let (app, _guard) = test_app().await;

    app.clone()
        .oneshot(post_json(
            "/api/v1/academic-sessions",
            &json!({
                "scope": "all",
                "program": "all",
                "session_name": "2025/2026",
                "status": "ongoing",
                "start_date": "2025-09-01",
                "end_date": "2026-07-15"
            }),
        ))
        .await
        .unwrap();

    let batch = Request::builder()
        .method("POST")
        .uri("/api/v1/academic-sessions/complete-ongoing")
        .header(header::REFERER, "/admin/sessions")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(batch).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/sessions"
    );

    // Second invocation with no referer: still success, falls back to the
    // session list.
    let again = Request::builder()
        .method("POST")
        .uri("/api/v1/academic-sessions/complete-ongoing")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(again).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/v1/academic-sessions"
    );

    let list = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/academic-sessions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(list).await;
    assert_eq!(body["academic_sessions"][0]["status"], "completed");
}

#[tokio::test]
async fn test_term_validation_error_names_the_field() {
    let (app, _guard) = test_app().await;

    let session = app
        .clone()
        .oneshot(post_json(
            "/api/v1/academic-sessions",
            &json!({
                "scope": "all",
                "program": "all",
                "session_name": "2026/2027",
                "status": "ongoing",
                "start_date": "2026-09-01",
                "end_date": "2027-07-15"
            }),
        ))
        .await
        .unwrap();
    let session = body_json(session).await;
    let session_id = session["id"].as_str().unwrap();

    let bad_term = app
        .oneshot(post_json(
            &format!("/api/v1/academic-sessions/{session_id}/terms"),
            &json!({
                "term_number": 1,
                "start_date": "2026-08-01",
                "end_date": "2026-12-18"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(bad_term.status(), StatusCode::BAD_REQUEST);
    let body = body_json(bad_term).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["field"], "start_date");
}
