//! # Application Configuration
//!
//! Top-level configuration and the request-handling knobs shared by every handler.

use thiserror::Error;

use super::{parse_flag, KeyVaultConfig, ServerConfig};
use crate::constants::{DEFAULT_MAX_MESSAGE_LENGTH, DEFAULT_SECRET_KEYWORD, DEFAULT_SECRET_NAME};

/// Startup configuration errors
///
/// Any of these aborts the process before the listener is bound.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("KeyVaultUrl configuration is required")]
    MissingKeyVaultUrl,
    #[error("KeyVaultUrl must not be empty")]
    EmptyKeyVaultUrl,
    #[error("KeyVaultUrl must use https: {0}")]
    InsecureKeyVaultUrl(String),
    #[error("invalid Key Vault name {0:?}: expected 3-24 letters, digits or hyphens")]
    InvalidVaultName(String),
    #[error("AZURE_CLIENT_ID is required for workload identity")]
    MissingClientId,
    #[error("unknown KEYVAULT_AUTH mode {0:?}")]
    UnknownAuthMode(String),
    #[error("MAX_MESSAGE_LENGTH must be a positive integer, got {0:?}")]
    InvalidMaxMessageLength(String),
    #[error("{0} must not be empty")]
    EmptySetting(&'static str),
}

/// Request-handling settings
///
/// Immutable after startup and shared by every handler through the router state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerSettings {
    /// Secret looked up when the page keyword is entered
    pub default_secret_name: String,
    /// Page keyword, compared trimmed and case-insensitive
    pub secret_keyword: String,
    /// Maximum input length in characters
    pub max_message_length: usize,
    /// Whether API path names go through the same validator as page input
    pub validate_api_names: bool,
    /// Include raw error messages, error types and source chains in responses
    pub debug_errors: bool,
}

impl Default for HandlerSettings {
    fn default() -> Self {
        Self {
            default_secret_name: DEFAULT_SECRET_NAME.to_string(),
            secret_keyword: DEFAULT_SECRET_KEYWORD.to_string(),
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            validate_api_names: true,
            debug_errors: false,
        }
    }
}

impl HandlerSettings {
    /// Load handler settings through `lookup`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for empty names or a non-positive length limit.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_secret_name = non_empty(lookup, "DEFAULT_SECRET_NAME")?
            .unwrap_or(defaults.default_secret_name);
        let secret_keyword = non_empty(lookup, "SECRET_KEYWORD")?
            .map(|keyword| keyword.to_lowercase())
            .unwrap_or(defaults.secret_keyword);

        let max_message_length = match lookup("MAX_MESSAGE_LENGTH") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => return Err(ConfigError::InvalidMaxMessageLength(raw)),
            },
            None => defaults.max_message_length,
        };

        let validate_api_names = lookup("VALIDATE_API_NAMES")
            .as_deref()
            .and_then(parse_flag)
            .unwrap_or(defaults.validate_api_names);
        let debug_errors = lookup("DEBUG_ERRORS")
            .as_deref()
            .and_then(parse_flag)
            .unwrap_or(defaults.debug_errors);

        Ok(Self {
            default_secret_name,
            secret_keyword,
            max_message_length,
            validate_api_names,
            debug_errors,
        })
    }
}

/// Complete process configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub key_vault: KeyVaultConfig,
    pub handlers: HandlerSettings,
}

impl AppConfig {
    /// Load the full configuration through `lookup`
    ///
    /// `lookup` maps a variable name to its value; the binary layers CLI flags over
    /// the process environment, tests pass a closure over a fixed map.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(&lookup),
            key_vault: KeyVaultConfig::from_lookup(&lookup)?,
            handlers: HandlerSettings::from_lookup(&lookup)?,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptySetting(key)),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyVaultAuth;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_vault_url_is_fatal() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingKeyVaultUrl);
        assert_eq!(err.to_string(), "KeyVaultUrl configuration is required");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("KeyVaultUrl", "https://kv.vault.azure.net/")]))
                .unwrap();
        assert_eq!(config.key_vault.vault_url, "https://kv.vault.azure.net/");
        assert_eq!(config.key_vault.auth, KeyVaultAuth::ManagedIdentity);
        assert_eq!(config.handlers, HandlerSettings::default());
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_handler_settings_overrides() {
        let settings = HandlerSettings::from_lookup(&lookup_from(&[
            ("DEFAULT_SECRET_NAME", " db-password "),
            ("SECRET_KEYWORD", "Reveal"),
            ("MAX_MESSAGE_LENGTH", "64"),
            ("VALIDATE_API_NAMES", "false"),
            ("DEBUG_ERRORS", "true"),
        ]))
        .unwrap();
        assert_eq!(settings.default_secret_name, "db-password");
        assert_eq!(settings.secret_keyword, "reveal");
        assert_eq!(settings.max_message_length, 64);
        assert!(!settings.validate_api_names);
        assert!(settings.debug_errors);
    }

    #[test]
    fn test_zero_length_limit_rejected() {
        let err = HandlerSettings::from_lookup(&lookup_from(&[("MAX_MESSAGE_LENGTH", "0")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidMaxMessageLength("0".to_string()));
    }

    #[test]
    fn test_blank_default_secret_name_rejected() {
        let err = HandlerSettings::from_lookup(&lookup_from(&[("DEFAULT_SECRET_NAME", "  ")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptySetting("DEFAULT_SECRET_NAME"));
    }
}
