//! # Metrics Registry
//!
//! Prometheus metrics registry setup and registration.

use anyhow::{Context, Result};
use prometheus::{Encoder, Registry, TextEncoder};
use std::sync::LazyLock;

/// Global Prometheus metrics registry
pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Register all metrics with the Prometheus registry
///
/// Prometheus `Registry::register()` takes ownership (`Box<dyn Collector>`),
/// so we clone the metrics. Prometheus metrics internally use `Arc`,
/// so cloning only bumps a reference count.
///
/// # Errors
///
/// Fails if a collector is registered twice.
pub fn register_metrics() -> Result<()> {
    super::request_metrics::register_request_metrics()?;
    super::provider_metrics::register_provider_metrics()?;
    Ok(())
}

/// Render every registered metric in the Prometheus text format
///
/// # Errors
///
/// Fails if encoding fails or produces invalid UTF-8.
pub fn gather_text() -> Result<String> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder
        .encode(&REGISTRY.gather(), &mut buffer)
        .context("Failed to encode metrics")?;
    String::from_utf8(buffer).context("Metrics output was not valid UTF-8")
}
