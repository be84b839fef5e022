mod common;

use axum::http::{Method, StatusCode};

#[tokio::test]
async fn test_health_check() {
    let db = common::setup_test_db();
    let app = common::create_test_app(db);

    let (status, body) = common::send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(!body["git_version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_ping() {
    let db = common::setup_test_db();
    let app = common::create_test_app(db);

    let (status, body) = common::send(&app, Method::GET, "/api/v1/ping", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Welcome to MFit");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let db = common::setup_test_db();
    let app = common::create_test_app(db);

    let (status, _) = common::send(&app, Method::GET, "/api/v1/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
