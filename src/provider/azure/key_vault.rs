//! # Azure Key Vault Client
//!
//! Client for reading secrets from Azure Key Vault.
//!
//! This module provides functionality to:
//! - Retrieve the latest value of a named secret
//! - Classify failures into [`SecretStoreErrorKind`]s
//! - Authenticate with Managed Identity or Workload Identity

mod auth;
mod client;

use crate::config::KeyVaultConfig;
use crate::observability::metrics;
use crate::provider::{SecretStore, SecretStoreError, SecretStoreErrorKind, SecretValue};
use anyhow::Result;
use async_trait::async_trait;
use azure_security_keyvault_secrets::models::Secret;
use azure_security_keyvault_secrets::SecretClient;
use std::time::Instant;
use tracing::{debug, field, warn, Instrument};

pub use self::client::create_secret_client;

/// Azure Key Vault provider implementation
pub struct AzureKeyVault {
    client: SecretClient,
    vault_url: String,
    vault_name: String,
}

impl std::fmt::Debug for AzureKeyVault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureKeyVault")
            .field("vault_url", &self.vault_url)
            .finish_non_exhaustive()
    }
}

impl AzureKeyVault {
    /// Create a new Azure Key Vault client
    ///
    /// # Errors
    ///
    /// Returns an error if credential or client initialization fails.
    pub fn new(config: &KeyVaultConfig) -> Result<Self> {
        let client = create_secret_client(config)?;
        Ok(Self {
            client,
            vault_url: config.vault_url.clone(),
            vault_name: config.vault_name().to_string(),
        })
    }

    async fn fetch(&self, secret_name: &str) -> Result<SecretValue, SecretStoreError> {
        // No version parameter: the latest version is returned
        let response = self
            .client
            .get_secret(secret_name, None)
            .await
            .map_err(|e| {
                let status = e.http_status().map(u16::from);
                SecretStoreError::from_sdk(secret_name, status, e)
            })?;

        let secret = serde_json::from_slice::<Secret>(&response.into_body()).map_err(|e| {
            SecretStoreError::new(
                SecretStoreErrorKind::InvalidResponse,
                secret_name,
                format!("Failed to deserialize Azure secret response: {e}"),
            )
            .with_source(e)
        })?;

        secret.value.map(SecretValue::new).ok_or_else(|| {
            SecretStoreError::new(
                SecretStoreErrorKind::NotFound,
                secret_name,
                "Secret has no current value",
            )
        })
    }
}

#[async_trait]
impl SecretStore for AzureKeyVault {
    async fn get_secret(&self, secret_name: &str) -> Result<SecretValue, SecretStoreError> {
        let span = tracing::info_span!(
            "azure.keyvault.secret.get",
            secret.name = secret_name,
            vault.name = %self.vault_name,
            operation.success = field::Empty,
            operation.duration_ms = field::Empty,
            error.kind = field::Empty,
        );
        let start = Instant::now();

        let result = self.fetch(secret_name).instrument(span.clone()).await;

        let elapsed = start.elapsed();
        span.record(
            "operation.duration_ms",
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        );
        match &result {
            Ok(_) => {
                span.record("operation.success", true);
                metrics::record_secret_lookup("azure", "success", elapsed.as_secs_f64());
                debug!(parent: &span, "Azure secret {} retrieved", secret_name);
            }
            Err(e) => {
                span.record("operation.success", false);
                span.record("error.kind", e.kind().as_str());
                metrics::record_secret_lookup("azure", e.kind().as_str(), elapsed.as_secs_f64());
                warn!(parent: &span, "Failed to get Azure secret {}: {}", secret_name, e.message());
            }
        }

        result
    }

    fn vault_url(&self) -> &str {
        &self.vault_url
    }
}
