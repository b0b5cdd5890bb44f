//! Test utilities for the API integration suites.
//!
//! Provides an in-memory SQLite database with migrations applied and a small
//! request helper for driving the full router.

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use serde_json::Value;
use tower::ServiceExt;
use workforce::config::AppConfig;
use workforce::server::{AppState, create_app, create_test_app_state};

/// Sets up an in-memory SQLite database with all migrations applied.
///
/// SQLite only enforces foreign keys when asked to, and the worker table's
/// RESTRICT constraint is part of what the suites exercise.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_string(),
    ))
    .await?;

    Ok(db)
}

/// Builds the full application router over a fresh in-memory database.
pub async fn setup_test_app() -> Result<(AppState, Router)> {
    let config = AppConfig {
        profile: "test".to_string(),
        ..Default::default()
    };

    let db = setup_test_db().await?;
    let state = create_test_app_state(config, db);
    let app = create_app(state.clone());

    Ok((state, app))
}

/// Sends one request through the router and returns status plus parsed body.
///
/// Empty bodies (204 responses) come back as `Value::Null`.
pub async fn send_request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json_body) => {
            builder = builder.header("Content-Type", "application/json");
            builder.body(Body::from(json_body.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let parsed = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, parsed)
}

/// Creates a workplace through the API and returns its id.
#[allow(dead_code)]
pub async fn create_workplace(app: &Router, name: &str, city: &str) -> i64 {
    let (status, body) = send_request(
        app,
        "POST",
        "/api/v1/workplaces",
        Some(serde_json::json!({ "name": name, "city": city })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

/// Creates a worker through the API and returns its id.
#[allow(dead_code)]
pub async fn create_worker(
    app: &Router,
    first_name: &str,
    last_name: &str,
    position: &str,
    workplace_id: i64,
) -> i64 {
    let (status, body) = send_request(
        app,
        "POST",
        "/api/v1/workers",
        Some(serde_json::json!({
            "first_name": first_name,
            "last_name": last_name,
            "position": position,
            "workplace_id": workplace_id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}
