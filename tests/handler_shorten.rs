mod common;

use axum::http::StatusCode;
use hash_shortener::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_shorten_success() {
    let (server, store) = common::create_memory_server();

    let response = server
        .post("/api/conv")
        .json(&json!({
            "params": { "url": "https://example.com/very/long/path" }
        }))
        .await;

    response.assert_status_ok();

    let expected = format!(
        "https://url.omoknooni.link/a/{}",
        derive_short_id("https://example.com/very/long/path")
    );
    assert_eq!(response.text(), expected);
    assert_eq!(response.text(), "https://url.omoknooni.link/a/HkTRTCT");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_shorten_serialized_text_body() {
    let (server, _store) = common::create_memory_server();

    let serialized = json!({ "params": { "url": "https://example.com" } }).to_string();

    let response = server.post("/api/conv").json(&json!(serialized)).await;

    response.assert_status_ok();
    assert_eq!(response.text(), "https://url.omoknooni.link/a/EAaArVR");
}

#[tokio::test]
async fn test_shorten_plain_text_body() {
    let (server, _store) = common::create_memory_server();

    let response = server
        .post("/api/conv")
        .text(r#"{"params":{"url":"https://example.com"}}"#)
        .await;

    response.assert_status_ok();
    assert_eq!(response.text(), "https://url.omoknooni.link/a/EAaArVR");
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let (server, store) = common::create_memory_server();
    let body = json!({ "params": { "url": "https://dedup.example.com" } });

    let first = server.post("/api/conv").json(&body).await;
    let second = server.post("/api/conv").json(&body).await;

    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(first.text(), second.text());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (server, store) = common::create_memory_server();

    let response = server
        .post("/api/conv")
        .json(&json!({ "params": {} }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_missing_params() {
    let (server, store) = common::create_memory_server();

    let response = server
        .post("/api/conv")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (server, store) = common::create_memory_server();

    let response = server
        .post("/api/conv")
        .json(&json!({ "params": { "url": "" } }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_url_with_control_character() {
    let (server, store) = common::create_memory_server();

    let response = server
        .post("/api/conv")
        .json(&json!({ "params": { "url": "https://example.com/a\nb" } }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let (server, store) = common::create_memory_server();

    let response = server.post("/api/conv").text("url=https://example.com").await;

    response.assert_status_bad_request();
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_shorten_store_failure() {
    let server = common::create_failing_server();

    let response = server
        .post("/api/conv")
        .json(&json!({ "params": { "url": "https://example.com" } }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Internal Server Error");
}
