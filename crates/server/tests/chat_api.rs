//! Integration tests for the chat relay endpoint

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use studychat_server::config::{ServerConfig, UpstreamConfig};
use studychat_server::server::{router, AppState};
use studychat_server::upstream::UpstreamClient;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(upstream_url: &str) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.upstream = UpstreamConfig {
        url: upstream_url.to_string(),
        timeout_secs: 5,
        api_key: None,
        model: "test-model".to_string(),
    };
    config
}

fn app(config: &ServerConfig) -> axum::Router {
    let upstream = UpstreamClient::new(&config.upstream).unwrap();
    router(
        AppState {
            upstream: Arc::new(upstream),
        },
        config,
    )
}

async fn post_chat(app: axum::Router, body: &Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn relays_message_and_returns_content() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "model": "test-model" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Hi" } }]
        })))
        .mount(&upstream)
        .await;

    let config = test_config(&upstream.uri());
    let (status, body) = post_chat(app(&config), &json!({ "message": "hello" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "Hi");
}

#[tokio::test]
async fn rejects_missing_message_without_calling_upstream() {
    let upstream = MockServer::start().await;
    let config = test_config(&upstream.uri());

    let (status, body) = post_chat(app(&config), &json!({ "message": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing message");

    let (status, body) = post_chat(app(&config), &json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing message");

    assert!(upstream.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn upstream_failure_maps_to_error_payload() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("overloaded"))
        .mount(&upstream)
        .await;

    let config = test_config(&upstream.uri());
    let (status, body) = post_chat(app(&config), &json!({ "message": "hello" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to get response from AI service");
}

#[tokio::test]
async fn unexpected_upstream_shape_still_answers() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "object": "list" })))
        .mount(&upstream)
        .await;

    let config = test_config(&upstream.uri());
    let (status, body) = post_chat(app(&config), &json!({ "message": "hello" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "Sorry, I could not process your request.");
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let upstream = MockServer::start().await;
    let config = test_config(&upstream.uri());

    let response = app(&config)
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
}
