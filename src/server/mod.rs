//! # HTTP Server
//!
//! Axum router, shared state and the serve loop.
//!
//! Routes:
//! - `GET /`, `/Home`, `/Home/Index` - input page
//! - `POST /`, `/Home/GetSecret` - form submission (`secretName`)
//! - `GET /Home/Error` - generic error page
//! - `GET /api/secret/{secretName}`, `/api/Secret/{secretName}` - JSON lookup
//! - `GET /health` - liveness
//! - `GET /metrics` - Prometheus exposition

pub mod api;
pub mod error;
pub mod health;
pub mod page;
pub mod request_id;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::HandlerSettings;
use crate::provider::SecretStore;

pub use error::{status_for_kind, ApiError};
pub use request_id::RequestId;

/// State shared by every handler
///
/// Both fields are immutable after startup; cloning only bumps reference counts.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<dyn SecretStore>,
    pub settings: Arc<HandlerSettings>,
}

impl AppState {
    pub fn new(store: Arc<dyn SecretStore>, settings: HandlerSettings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index).post(page::get_secret))
        .route("/Home", get(page::index))
        .route("/Home/Index", get(page::index))
        .route("/Home/GetSecret", post(page::get_secret))
        .route("/Home/Error", get(page::error_page))
        .route("/api/secret/{secret_name}", get(api::get_secret))
        .route("/api/Secret/{secret_name}", get(api::get_secret))
        .route("/health", get(health::health))
        .route("/metrics", get(health::metrics))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id::request_id_layer)),
        )
        .with_state(state)
}

/// Serve `state` on an already-bound listener until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the server loop fails.
pub async fn start_server(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received, draining connections");
}
