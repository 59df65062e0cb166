//! # Key Vault Secret Front End
//!
//! A small web front end that reads named secrets from Azure Key Vault.
//!
//! ## Overview
//!
//! 1. **Form page** - `GET /` renders an input form; submitting the keyword `secret`
//!    fetches the configured secret, anything else is echoed back
//! 2. **JSON API** - `GET /api/secret/{name}` returns `{"name", "value"}`
//! 3. **Probes** - `GET /health` and `GET /metrics`
//!
//! Authentication to the vault uses the platform identity (Managed Identity or
//! Workload Identity); no credentials are configured in this process.
//!
//! ## Configuration
//!
//! `KeyVaultUrl` is required. See the `config` module for the optional settings.

use anyhow::Result;
use clap::Parser;

use keyvault_secret_frontend::cli::Cli;
use keyvault_secret_frontend::runtime::initialization::initialize;
use keyvault_secret_frontend::server::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Fails before binding when configuration is missing or invalid
    let init_result = initialize(&cli).await?;

    start_server(init_result.listener, init_result.state).await?;

    tracing::info!("Server stopped");
    Ok(())
}
