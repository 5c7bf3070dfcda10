//! Integration tests for hello-service.
//!
//! Each test serves the real router on an ephemeral port and talks to it
//! over HTTP. Run with: cargo test --test integration

use std::net::SocketAddr;

use hello_service::api::create_router;
use pretty_assertions::assert_eq;
use reqwest::{header, StatusCode};
use serde_json::Value;
use serial_test::serial;
use tokio::net::TcpListener;

/// Spawn the service on 127.0.0.1 with an OS-assigned port.
async fn spawn_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router()).await.unwrap();
    });

    addr
}

fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{}{}", addr, path)
}

/// Health probe over the wire.
#[tokio::test]
async fn test_health_endpoint() {
    let addr = spawn_server().await;

    let response = reqwest::get(url(addr, "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

/// Root payload shape and defaults.
#[tokio::test]
#[serial]
async fn test_root_endpoint_defaults() {
    std::env::remove_var("APP_VERSION");
    std::env::remove_var("BUILD_TIMESTAMP");
    let addr = spawn_server().await;

    let response = reqwest::get(url(addr, "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "message": "Hello, CI/CD with Flask!",
            "version": "1.0.0",
            "timestamp": "unknown",
        })
    );
}

/// Deployment metadata set after startup is visible on the next request.
#[tokio::test]
#[serial]
async fn test_root_endpoint_reflects_environment() {
    std::env::remove_var("APP_VERSION");
    std::env::remove_var("BUILD_TIMESTAMP");
    let addr = spawn_server().await;

    std::env::set_var("APP_VERSION", "2.0.1");
    std::env::set_var("BUILD_TIMESTAMP", "2025-08-24T16:12:55Z");
    let body: Value = reqwest::get(url(addr, "/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    std::env::remove_var("APP_VERSION");
    std::env::remove_var("BUILD_TIMESTAMP");

    assert_eq!(body["version"], "2.0.1");
    assert_eq!(body["timestamp"], "2025-08-24T16:12:55Z");
}

/// Unknown paths are 404.
#[tokio::test]
async fn test_404_endpoint() {
    let addr = spawn_server().await;

    let response = reqwest::get(url(addr, "/nonexistent")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Wrong method on a known path is 405.
#[tokio::test]
async fn test_method_not_allowed() {
    let addr = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client.post(url(addr, "/health")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = client.delete(url(addr, "/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
