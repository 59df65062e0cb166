//! # Initialization
//!
//! Startup logic including rustls setup, tracing, metrics, configuration loading,
//! Key Vault client creation and listener binding.
//!
//! Configuration problems abort here, before the listener exists, so a
//! misconfigured process never serves a request.

use crate::cli::Cli;
use crate::config::{AppConfig, ConfigError};
use crate::observability;
use crate::provider::azure::AzureKeyVault;
use crate::provider::SecretStore;
use crate::server::AppState;
use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Everything `main` needs to start serving
#[derive(Debug)]
pub struct InitializationResult {
    /// Effective configuration
    pub config: AppConfig,
    /// Router state holding the shared store client
    pub state: AppState,
    /// Bound listener
    pub listener: TcpListener,
}

/// Initialize the runtime
///
/// This function handles:
/// - rustls crypto provider setup
/// - Tracing subscriber setup
/// - Metrics registration
/// - Configuration loading (`.env`, environment, CLI flags)
/// - Key Vault client creation
/// - Listener binding
///
/// # Errors
///
/// Fails on invalid configuration, client construction errors or if the listen
/// address cannot be bound.
pub async fn initialize(cli: &Cli) -> Result<InitializationResult> {
    // Configure rustls crypto provider FIRST, before any other operations
    // Required for rustls 0.23+ when no default provider is set via features
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_already_installed| anyhow!("Failed to install rustls crypto provider"))?;

    // Read .env before tracing so RUST_LOG from the file applies
    let dotenv = dotenvy::dotenv();
    observability::logging::init_tracing();

    info!("Starting Key Vault secret front end v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Build info: timestamp={}, datetime={}, git_hash={}",
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_DATETIME"),
        env!("BUILD_GIT_HASH")
    );

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    observability::metrics::register_metrics()?;

    let config = load_config(cli).context("Invalid configuration")?;
    info!("Key Vault URL: {}", config.key_vault.vault_url);
    if config.handlers.debug_errors {
        warn!("DEBUG_ERRORS is enabled: error responses include internal diagnostics");
    }
    if !config.handlers.validate_api_names {
        warn!("VALIDATE_API_NAMES is disabled: API names reach the store unchecked");
    }

    let store: Arc<dyn SecretStore> = Arc::new(
        AzureKeyVault::new(&config.key_vault).context("Failed to initialize Key Vault client")?,
    );
    let state = AppState::new(store, config.handlers.clone());

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    Ok(InitializationResult {
        config,
        state,
        listener,
    })
}

/// Load configuration with CLI flags layered over the process environment
///
/// # Errors
///
/// Returns the [`ConfigError`] of the first invalid or missing setting.
pub fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    load_config_with(cli, |key| std::env::var(key).ok())
}

/// Load configuration with CLI flags layered over `env`
///
/// # Errors
///
/// Returns the [`ConfigError`] of the first invalid or missing setting.
pub fn load_config_with<F>(cli: &Cli, env: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    AppConfig::from_lookup(|key| cli.lookup(key).or_else(|| env(key)))
}
