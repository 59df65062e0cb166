//! # Key Vault Configuration
//!
//! Vault address and credential selection.

use super::ConfigError;
use crate::constants::KEY_VAULT_DNS_SUFFIX;

/// Azure Key Vault connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyVaultConfig {
    /// Normalized vault URL, always `https://` with a trailing slash
    pub vault_url: String,
    /// How the process authenticates to the vault
    pub auth: KeyVaultAuth,
}

/// Credential used to reach the vault
///
/// Only ambient platform identities are supported; no secret material is ever
/// read from this process's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyVaultAuth {
    /// Managed Identity (App Service, AKS node identity, VMs)
    ManagedIdentity,
    /// Workload Identity federation for a specific app registration
    WorkloadIdentity {
        /// Client ID of the federated app registration
        client_id: String,
    },
}

impl KeyVaultConfig {
    /// Load Key Vault settings through `lookup`
    ///
    /// The address comes from `KeyVaultUrl` (the name App Service and ASP.NET style
    /// deployments use) or `KEY_VAULT_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKeyVaultUrl`] when neither variable is set, and the
    /// errors of [`normalize_vault_url`] for malformed values.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("KeyVaultUrl")
            .or_else(|| lookup("KEY_VAULT_URL"))
            .ok_or(ConfigError::MissingKeyVaultUrl)?;
        let vault_url = normalize_vault_url(&raw_url)?;

        let auth = match lookup("KEYVAULT_AUTH")
            .map(|mode| mode.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("" | "managed-identity" | "managed") => KeyVaultAuth::ManagedIdentity,
            Some("workload-identity" | "workload") => {
                let client_id = lookup("AZURE_CLIENT_ID")
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .ok_or(ConfigError::MissingClientId)?;
                KeyVaultAuth::WorkloadIdentity { client_id }
            }
            Some(other) => return Err(ConfigError::UnknownAuthMode(other.to_string())),
        };

        Ok(Self { vault_url, auth })
    }

    /// Vault name extracted from the URL, for span and log fields
    pub fn vault_name(&self) -> &str {
        vault_name_from_url(&self.vault_url)
    }
}

/// Construct vault URL from a vault name or URL
///
/// Supports both full URLs and vault names:
/// - `https://my-vault.vault.azure.net` becomes `https://my-vault.vault.azure.net/`
/// - `my-vault` becomes `https://my-vault.vault.azure.net/`
///
/// # Errors
///
/// Rejects empty values, non-https URLs and vault names with characters Azure does not allow.
pub fn normalize_vault_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyKeyVaultUrl);
    }

    if trimmed.starts_with("https://") {
        if trimmed.len() == "https://".len() {
            return Err(ConfigError::EmptyKeyVaultUrl);
        }
        return Ok(if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        });
    }

    if trimmed.contains("://") {
        return Err(ConfigError::InsecureKeyVaultUrl(trimmed.to_string()));
    }

    // Vault names: 3-24 characters, alphanumerics and hyphens
    let valid_name = (3..=24).contains(&trimmed.len())
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid_name {
        return Err(ConfigError::InvalidVaultName(trimmed.to_string()));
    }

    Ok(format!("https://{trimmed}{KEY_VAULT_DNS_SUFFIX}/"))
}

pub(crate) fn vault_name_from_url(vault_url: &str) -> &str {
    vault_url
        .strip_prefix("https://")
        .and_then(|s| s.strip_suffix('/'))
        .map(|host| host.strip_suffix(KEY_VAULT_DNS_SUFFIX).unwrap_or(host))
        .unwrap_or("unknown")
}
