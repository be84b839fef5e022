#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use fitcatalog::db::{create_memory_pool, Database, DEFAULT_QUERY_TIMEOUT};
use fitcatalog::migrations::run_migrations_for_tests;
use fitcatalog::models::{BodyPart, Equipment, Target};
use fitcatalog::repositories::{BodyPartRepository, EquipmentRepository, TargetRepository};
use fitcatalog::validation::PayloadValidator;

pub fn setup_test_db() -> Database {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    Database::new(pool, DEFAULT_QUERY_TIMEOUT)
}

pub fn create_test_app(db: Database) -> Router {
    fitcatalog::build_app(db, PayloadValidator::default())
}

/// Sends one request and returns the status with the parsed JSON body
/// (`Value::Null` for empty bodies).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> StatusCode {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(raw.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
}

// Test data creation helpers
pub async fn create_test_body_part(db: &Database, name: &str) -> BodyPart {
    BodyPartRepository::new(db.clone())
        .create(name, &format!("https://img/{}.png", name.to_lowercase()))
        .await
        .unwrap()
}

pub async fn create_test_target(db: &Database, name: &str, body_part_id: i64) -> Target {
    TargetRepository::new(db.clone())
        .create(name, body_part_id)
        .await
        .unwrap()
}

pub async fn create_test_equipment(db: &Database, name: &str) -> Equipment {
    EquipmentRepository::new(db.clone()).create(name).await.unwrap()
}

pub async fn count_rows(db: &Database, table: &'static str) -> i64 {
    db.run(move |conn| {
        let n: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
        Ok(n)
    })
    .await
    .unwrap()
}
