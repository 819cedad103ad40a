mod common;

use axum::http::StatusCode;
use std::time::Duration;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _store) = common::create_memory_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let server = common::create_failing_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_health_endpoint_store_stalled() {
    let server = common::create_stalled_server();

    let response = tokio::time::timeout(Duration::from_secs(5), server.get("/health"))
        .await
        .expect("health check should answer within the store timeout");

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["store"]["status"], "error");
}
