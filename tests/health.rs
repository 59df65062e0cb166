//! Liveness, metrics exposition and request correlation.

mod support;

use axum::http::{HeaderName, HeaderValue};
use chrono::DateTime;
use keyvault_secret_frontend::observability::metrics;
use serde_json::Value;
use support::{default_server, StubStore};

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

#[tokio::test]
async fn test_health_reports_ok_with_timestamp() {
    let store = StubStore::empty();
    let server = default_server(&store);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "OK");
    let timestamp = body["timestamp"].as_str().unwrap_or_default();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok(), "{timestamp}");
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_metrics_exposes_request_counters() {
    // other tests in this binary may have registered already
    let _ = metrics::register_metrics();

    let store = StubStore::with_secret("foo", "bar");
    let server = default_server(&store);
    server.get("/api/secret/foo").await.assert_status_ok();

    let response = server.get("/metrics").await;
    response.assert_status_ok();
    let text = response.text();
    assert!(text.contains("keyvault_frontend_http_requests_total"));
    assert!(text.contains(r#"handler="api""#));
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let store = StubStore::empty();
    let server = default_server(&store);

    let response = server.get("/health").await;
    let id = response.header(REQUEST_ID);
    let id = id.to_str().unwrap_or_default();
    assert!(uuid::Uuid::parse_str(id).is_ok(), "{id}");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let store = StubStore::with_secret("foo", "bar");
    let server = default_server(&store);

    let response = server
        .get("/api/secret/foo")
        .add_header(
            REQUEST_ID,
            HeaderValue::from_static("trace-abc-123"),
        )
        .await;
    assert_eq!(response.header(REQUEST_ID), "trace-abc-123");
}
