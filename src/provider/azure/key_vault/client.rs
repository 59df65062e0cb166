//! # Azure Key Vault Client Creation
//!
//! Handles creation and initialization of the Azure Key Vault `SecretClient`.

use crate::config::KeyVaultConfig;
use anyhow::{Context, Result};
use azure_security_keyvault_secrets::SecretClient;
use tracing::info;

use super::auth::create_credential;

/// Create the Key Vault secret client for the configured vault
///
/// Constructing the client does not contact the vault; the first request does.
pub fn create_secret_client(config: &KeyVaultConfig) -> Result<SecretClient> {
    let credential = create_credential(config)?;

    info!("Creating Key Vault client for {}", config.vault_url);
    SecretClient::new(&config.vault_url, credential, None)
        .context("Failed to create Azure Key Vault SecretClient")
}
