//! Tests for the service client

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_service_client_config_default() {
    let config = ServiceClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.endpoint.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("ostack-sdk/"));
}

#[test]
fn test_service_client_config_builder() {
    let config = ServiceClientConfig::builder()
        .endpoint("https://compute.example.com/v2")
        .timeout(Duration::from_secs(10))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.endpoint,
        Some("https://compute.example.com/v2".to_string())
    );
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(config.default_headers.get("X-Custom"), Some(&"value".to_string()));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_service_url_joins_parts() {
    let config = ServiceClientConfig::builder()
        .endpoint("https://compute.example.com/v2/")
        .build();
    let client = ServiceClient::with_config(config);

    assert_eq!(
        client.service_url(&["servers", "detail"]),
        "https://compute.example.com/v2/servers/detail"
    );
}

#[tokio::test]
async fn test_get_json_relative_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "servers": [] })))
        .mount(&server)
        .await;

    let config = ServiceClientConfig::builder().endpoint(server.uri()).build();
    let client = ServiceClient::with_config(config);
    let body: serde_json::Value = client.get_json("/servers").await.unwrap();

    assert_eq!(body, json!({ "servers": [] }));
}

#[tokio::test]
async fn test_token_sent_on_every_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/secret"))
        .and(header(AUTH_TOKEN_HEADER, "tok-abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ServiceClientConfig::builder().endpoint(server.uri()).build();
    let client = ServiceClient::with_config(config).with_token("tok-abc123");
    let body: serde_json::Value = client.get_json("/secret").await.unwrap();

    assert_eq!(body["ok"], json!(true));
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("itemNotFound"))
        .mount(&server)
        .await;

    let config = ServiceClientConfig::builder().endpoint(server.uri()).build();
    let client = ServiceClient::with_config(config);
    let err = client.get("/missing").await.unwrap_err();

    match err {
        crate::error::Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "itemNotFound");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_returns_body_headers_and_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ints": [1, 2, 3] }))
                .insert_header("X-Request-Id", "req-9"),
        )
        .mount(&server)
        .await;

    let client = ServiceClient::new();
    let url = format!("{}/page?limit=3", server.uri());
    let fetched = client.fetch(&url).await.unwrap();

    assert_eq!(fetched.body, json!({ "ints": [1, 2, 3] }));
    assert_eq!(
        fetched.headers.get("X-Request-Id").map(|v| v.to_str().unwrap()),
        Some("req-9")
    );
    assert_eq!(fetched.url.query(), Some("limit=3"));
}

#[tokio::test]
async fn test_fetch_malformed_json_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = ServiceClient::new();
    let err = client
        .fetch(&format!("{}/garbage", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, crate::error::Error::Http(_)));
}
