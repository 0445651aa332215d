//! End-to-end tests for the full rosterd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`: no TCP port is bound.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use roster_adapter_http_axum::router;
use roster_adapter_http_axum::state::AppState;
use roster_adapter_storage_sqlite_sqlx::{Database, SqliteStudentRepository};
use roster_app::services::student_service::StudentService;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> Router {
    let db = Database::open("sqlite::memory:")
        .await
        .expect("in-memory database should initialise");

    let repo = SqliteStudentRepository::new(db.pool().clone());
    let state = AppState::new(StudentService::new(repo));

    router::build(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    };
    app.clone().oneshot(request.unwrap()).await.unwrap()
}

async fn body_bytes(resp: Response) -> Vec<u8> {
    resp.into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(resp: Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

async fn create(app: &Router, body: Value) -> Value {
    let resp = send(app, Method::POST, "/api/students", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let resp = send(&app, Method::GET, "/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Students CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_assign_first_id_when_creating_student() {
    let app = app().await;

    let created = create(&app, json!({ "nom": "Mido" })).await;

    assert_eq!(created["id"], 1);
    assert_eq!(created["nom"], "Mido");
}

#[tokio::test]
async fn should_ignore_client_supplied_id_on_create() {
    let app = app().await;
    create(&app, json!({ "nom": "First" })).await;

    let created = create(&app, json!({ "id": 1, "nom": "Second" })).await;

    assert_eq!(created["id"], 2);
    let first = body_json(send(&app, Method::GET, "/api/students/1", None).await).await;
    assert_eq!(first["nom"], "First");
}

#[tokio::test]
async fn should_retrieve_created_student_by_id() {
    let app = app().await;
    let created = create(
        &app,
        json!({ "nom": "Alaoui", "prenom": "Sara", "dateNaissance": "1985-01-30" }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let resp = send(&app, Method::GET, &format!("/api/students/{id}"), None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn should_return_not_found_with_empty_body_for_unknown_id() {
    let app = app().await;

    let resp = send(&app, Method::GET, "/api/students/42", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn should_list_all_students() {
    let app = app().await;
    create(&app, json!({ "nom": "Alaoui" })).await;
    create(&app, json!({ "nom": "Bennani" })).await;

    let resp = send(&app, Method::GET, "/api/students", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let list = body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn should_return_empty_list_when_no_students() {
    let app = app().await;
    let list = body_json(send(&app, Method::GET, "/api/students", None).await).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn should_replace_student_when_updating() {
    let app = app().await;
    create(
        &app,
        json!({ "nom": "Alaoui", "prenom": "Sara", "dateNaissance": "1985-01-30" }),
    )
    .await;

    let resp = send(
        &app,
        Method::PUT,
        "/api/students/1",
        Some(json!({ "id": 99, "nom": "Idrissi" })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["id"], 1);

    let fetched = body_json(send(&app, Method::GET, "/api/students/1", None).await).await;
    assert_eq!(fetched["nom"], "Idrissi");
    assert_eq!(fetched["prenom"], Value::Null);
    assert_eq!(fetched["dateNaissance"], Value::Null);

    let missing = send(&app, Method::GET, "/api/students/99", None).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_insert_when_updating_unknown_id() {
    let app = app().await;

    let resp = send(
        &app,
        Method::PUT,
        "/api/students/5",
        Some(json!({ "nom": "Nouveau" })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["id"], 5);
    let fetched = send(&app, Method::GET, "/api/students/5", None).await;
    assert_eq!(fetched.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_delete_existing_student_then_report_not_found() {
    let app = app().await;
    create(&app, json!({ "nom": "Mido" })).await;

    let resp = send(&app, Method::DELETE, "/api/students/1", None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let again = send(&app, Method::DELETE, "/api/students/1", None).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let fetched = send(&app, Method::GET, "/api/students/1", None).await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_leave_store_unchanged_when_deleting_unknown_id() {
    let app = app().await;
    create(&app, json!({ "nom": "Mido" })).await;

    let resp = send(&app, Method::DELETE, "/api/students/99", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let count = body_json(send(&app, Method::GET, "/api/students/count", None).await).await;
    assert_eq!(count, 1);
}

// ---------------------------------------------------------------------------
// Count and statistics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_count_matching_list_length() {
    let app = app().await;
    for nom in ["A", "B", "C"] {
        create(&app, json!({ "nom": nom })).await;
    }

    let resp = send(&app, Method::GET, "/api/students/count", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let count = body_json(resp).await;

    let list = body_json(send(&app, Method::GET, "/api/students", None).await).await;
    assert_eq!(count.as_u64().unwrap(), list.as_array().unwrap().len() as u64);
    assert_eq!(count, 3);
}

#[tokio::test]
async fn should_group_students_by_birth_year() {
    let app = app().await;
    for date in [
        "1985-03-01",
        "1990-07-14",
        "1985-11-20",
        "1990-01-02",
        "1990-12-31",
    ] {
        create(&app, json!({ "nom": "X", "dateNaissance": date })).await;
    }

    let resp = send(&app, Method::GET, "/api/students/stats/by-year", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let stats = body_json(resp).await;
    assert_eq!(
        stats,
        json!([
            { "year": 1985, "count": 2 },
            { "year": 1990, "count": 3 },
        ])
    );
}

#[tokio::test]
async fn should_include_every_birth_year_in_stats() {
    let app = app().await;
    for date in ["+10000-01-01", "-0005-06-01", "1990-07-14"] {
        create(&app, json!({ "nom": "X", "dateNaissance": date })).await;
    }

    let stats =
        body_json(send(&app, Method::GET, "/api/students/stats/by-year", None).await).await;
    let count = body_json(send(&app, Method::GET, "/api/students/count", None).await).await;

    assert_eq!(
        stats,
        json!([
            { "year": -5, "count": 1 },
            { "year": 1990, "count": 1 },
            { "year": 10000, "count": 1 },
        ])
    );
    assert_eq!(count, 3);
}

#[tokio::test]
async fn should_return_empty_stats_when_no_students() {
    let app = app().await;
    let stats =
        body_json(send(&app, Method::GET, "/api/students/stats/by-year", None).await).await;
    assert_eq!(stats, json!([]));
}

// ---------------------------------------------------------------------------
// Malformed requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_non_numeric_id() {
    let app = app().await;
    let resp = send(&app, Method::DELETE, "/api/students/abc", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_malformed_birth_date() {
    let app = app().await;
    let resp = send(
        &app,
        Method::POST,
        "/api/students",
        Some(json!({ "nom": "X", "dateNaissance": "yesterday" })),
    )
    .await;
    assert!(resp.status().is_client_error());
}
