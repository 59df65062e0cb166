//! # Command Line
//!
//! Flags that override the environment for a single run.
//!
//! ## Usage
//!
//! ```bash
//! # Serve against a vault by name, on port 3000
//! keyvault-secret-frontend --key-vault-url my-vault --port 3000
//!
//! # Local troubleshooting: include store diagnostics in error responses
//! KeyVaultUrl=https://my-vault.vault.azure.net/ keyvault-secret-frontend --debug-errors
//! ```

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(name = "keyvault-secret-frontend")]
#[command(about = "Web front end for reading secrets from Azure Key Vault", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Key Vault URL or vault name (overrides KeyVaultUrl)
    #[arg(long)]
    pub key_vault_url: Option<String>,

    /// Listen port (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Listen address (overrides BIND_ADDRESS)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Include store diagnostics in error responses (overrides DEBUG_ERRORS)
    #[arg(long)]
    pub debug_errors: bool,
}

impl Cli {
    /// Value of `key` set by a flag, if any
    ///
    /// Keys use the environment variable names so the result can be layered over
    /// `std::env::var` when loading [`AppConfig`](crate::config::AppConfig).
    pub fn lookup(&self, key: &str) -> Option<String> {
        match key {
            "KeyVaultUrl" | "KEY_VAULT_URL" => self.key_vault_url.clone(),
            "PORT" => self.port.map(|port| port.to_string()),
            "BIND_ADDRESS" => self.bind.clone(),
            "DEBUG_ERRORS" if self.debug_errors => Some("true".to_string()),
            _ => None,
        }
    }
}
