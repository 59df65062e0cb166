//! # Configuration
//!
//! Process configuration loaded from environment variables, optionally seeded from a
//! `.env` file and overridden by command-line flags.
//!
//! Every setting except the Key Vault address has a default. A missing or malformed
//! vault address is a [`ConfigError`] and the process never starts serving.

mod app;
mod key_vault;
mod server;

pub use app::{AppConfig, ConfigError, HandlerSettings};
pub use key_vault::{normalize_vault_url, KeyVaultAuth, KeyVaultConfig};
pub use server::ServerConfig;

/// Parse a boolean flag the way operators usually write them in ConfigMaps and `.env` files
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
