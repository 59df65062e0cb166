//! # Azure Key Vault Authentication
//!
//! Builds the ambient platform credential used by the Key Vault client.

use crate::config::{KeyVaultAuth, KeyVaultConfig};
use anyhow::{Context, Result};
use azure_core::credentials::TokenCredential;
use azure_identity::{ManagedIdentityCredential, WorkloadIdentityCredential};
use std::sync::Arc;
use tracing::info;

/// Create Azure credential based on configuration
/// Supports Managed Identity (default) and Workload Identity
pub fn create_credential(config: &KeyVaultConfig) -> Result<Arc<dyn TokenCredential>> {
    let credential: Arc<dyn TokenCredential> = match &config.auth {
        KeyVaultAuth::WorkloadIdentity { client_id } => {
            info!(
                "Using Azure Workload Identity authentication with client ID: {}",
                client_id
            );
            let options = azure_identity::WorkloadIdentityCredentialOptions {
                client_id: Some(client_id.clone()),
                ..Default::default()
            };
            // Note: Credential constructors return Arc<Self>
            WorkloadIdentityCredential::new(Some(options))
                .context("Failed to create WorkloadIdentityCredential")?
        }
        KeyVaultAuth::ManagedIdentity => {
            info!("Using Managed Identity for Key Vault access");
            ManagedIdentityCredential::new(None)
                .context("Failed to create ManagedIdentityCredential")?
        }
    };

    Ok(credential)
}
