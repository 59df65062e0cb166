//! Shared test fixtures: a counting stand-in secret store and router builders.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use keyvault_secret_frontend::config::HandlerSettings;
use keyvault_secret_frontend::{
    router, AppState, SecretStore, SecretStoreError, SecretStoreErrorKind, SecretValue,
};

pub const TEST_VAULT_URL: &str = "https://test-vault.vault.azure.net/";

/// Message returned by failing stubs; mimics an SDK error with internal details
pub const STUB_FAILURE_MESSAGE: &str =
    "HTTP 500 from https://test-vault.vault.azure.net/secrets/x caller-oid=0000";

/// In-memory secret store that records every lookup
#[derive(Debug, Default)]
pub struct StubStore {
    values: HashMap<String, String>,
    failure: Option<SecretStoreErrorKind>,
    calls: Mutex<Vec<String>>,
}

impl StubStore {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_secret(name: &str, value: &str) -> Arc<Self> {
        let mut values = HashMap::new();
        values.insert(name.to_string(), value.to_string());
        Arc::new(Self {
            values,
            ..Self::default()
        })
    }

    /// Store that holds `name` but fails every lookup with `kind`
    pub fn failing(kind: SecretStoreErrorKind, name: &str, value: &str) -> Arc<Self> {
        let mut values = HashMap::new();
        values.insert(name.to_string(), value.to_string());
        Arc::new(Self {
            values,
            failure: Some(kind),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SecretStore for StubStore {
    async fn get_secret(&self, name: &str) -> Result<SecretValue, SecretStoreError> {
        self.calls.lock().unwrap().push(name.to_string());
        if let Some(kind) = self.failure {
            return Err(SecretStoreError::new(kind, name, STUB_FAILURE_MESSAGE));
        }
        self.values
            .get(name)
            .map(|value| SecretValue::new(value.as_str()))
            .ok_or_else(|| {
                SecretStoreError::new(
                    SecretStoreErrorKind::NotFound,
                    name,
                    format!("SecretNotFound: {name}"),
                )
            })
    }

    fn vault_url(&self) -> &str {
        TEST_VAULT_URL
    }
}

pub fn test_server(store: &Arc<StubStore>, settings: HandlerSettings) -> TestServer {
    let store: Arc<dyn SecretStore> = Arc::clone(store) as Arc<dyn SecretStore>;
    TestServer::new(router(AppState::new(store, settings))).unwrap()
}

pub fn default_server(store: &Arc<StubStore>) -> TestServer {
    test_server(store, HandlerSettings::default())
}

pub fn debug_settings() -> HandlerSettings {
    HandlerSettings {
        debug_errors: true,
        ..HandlerSettings::default()
    }
}
