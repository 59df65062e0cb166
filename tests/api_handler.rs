//! JSON secret API: success bodies, status mapping and error body contents.

mod support;

use axum::http::StatusCode;
use keyvault_secret_frontend::config::HandlerSettings;
use keyvault_secret_frontend::SecretStoreErrorKind;
use serde_json::{json, Value};
use support::{
    debug_settings, default_server, test_server, StubStore, STUB_FAILURE_MESSAGE, TEST_VAULT_URL,
};

#[tokio::test]
async fn test_returns_name_and_value() {
    let store = StubStore::with_secret("foo", "bar");
    let server = default_server(&store);

    let response = server.get("/api/secret/foo").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "name": "foo", "value": "bar" }));
    assert_eq!(store.calls(), vec!["foo".to_string()]);
}

#[tokio::test]
async fn test_capitalized_route_alias() {
    let store = StubStore::with_secret("foo", "bar");
    let server = default_server(&store);

    let response = server.get("/api/Secret/foo").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["value"], "bar");
}

#[tokio::test]
async fn test_store_failure_hides_diagnostics_by_default() {
    let store = StubStore::failing(SecretStoreErrorKind::Internal, "foo", "s3cr3t-value");
    let server = default_server(&store);

    let response = server.get("/api/secret/foo").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.json::<Value>();
    assert_eq!(body["error"], "Failed to retrieve secret");
    assert_eq!(body["secretName"], "foo");
    assert_eq!(body["message"], "an internal error occurred");
    assert!(body.get("value").is_none());
    assert!(body.get("stackTrace").is_none());
    assert!(body.get("keyVaultUrl").is_none());
    assert!(body.get("exceptionType").is_none());
    assert!(!response.text().contains("s3cr3t-value"));
}

#[tokio::test]
async fn test_store_failure_includes_diagnostics_in_debug_mode() {
    let store = StubStore::failing(SecretStoreErrorKind::Internal, "foo", "s3cr3t-value");
    let server = test_server(&store, debug_settings());

    let response = server.get("/api/secret/foo").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.json::<Value>();
    assert_eq!(body["message"], STUB_FAILURE_MESSAGE);
    assert_eq!(body["keyVaultUrl"], TEST_VAULT_URL);
    assert_eq!(body["exceptionType"], "InternalError");
    assert!(body["stackTrace"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(body.get("value").is_none());
    assert!(!response.text().contains("s3cr3t-value"));
}

#[tokio::test]
async fn test_status_follows_failure_kind() {
    let cases = [
        (SecretStoreErrorKind::NotFound, StatusCode::NOT_FOUND),
        (SecretStoreErrorKind::Unauthorized, StatusCode::FORBIDDEN),
        (SecretStoreErrorKind::Throttled, StatusCode::TOO_MANY_REQUESTS),
        (SecretStoreErrorKind::Unavailable, StatusCode::BAD_GATEWAY),
        (SecretStoreErrorKind::InvalidResponse, StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (kind, status) in cases {
        let store = StubStore::failing(kind, "foo", "bar");
        let server = default_server(&store);
        server.get("/api/secret/foo").await.assert_status(status);
    }
}

#[tokio::test]
async fn test_unknown_secret_is_not_found() {
    let store = StubStore::with_secret("foo", "bar");
    let server = default_server(&store);

    let response = server.get("/api/secret/missing").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["secretName"], "missing");
}

#[tokio::test]
async fn test_oversized_name_rejected_before_lookup() {
    let store = StubStore::with_secret("foo", "bar");
    let server = default_server(&store);

    let name = "a".repeat(1001);
    let response = server.get(&format!("/api/secret/{name}")).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["error"], "Invalid secret name");
    assert_eq!(body["message"], "Message cannot exceed 1000 characters");
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_blank_name_rejected_before_lookup() {
    let store = StubStore::with_secret("foo", "bar");
    let server = default_server(&store);

    let response = server.get("/api/secret/%20%20").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], "Please enter a message");
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_validation_can_be_disabled() {
    let store = StubStore::empty();
    let settings = HandlerSettings {
        validate_api_names: false,
        ..HandlerSettings::default()
    };
    let server = test_server(&store, settings);

    let name = "a".repeat(1001);
    let response = server.get(&format!("/api/secret/{name}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(store.calls(), vec![name]);
}
