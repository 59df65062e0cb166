//! # Provider Metrics
//!
//! Metrics for secret store lookups.

use crate::observability::metrics::registry::REGISTRY;
use anyhow::Result;
use prometheus::{HistogramVec, IntCounterVec};
use std::sync::LazyLock;

static SECRET_LOOKUPS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "keyvault_frontend_secret_lookups_total",
            "Total number of secret store lookups by outcome",
        ),
        &["provider", "outcome"],
    )
    .expect("Failed to create SECRET_LOOKUPS_TOTAL metric - this should never happen")
});

static SECRET_LOOKUP_DURATION: LazyLock<HistogramVec> = LazyLock::new(|| {
    HistogramVec::new(
        prometheus::HistogramOpts::new(
            "keyvault_frontend_secret_lookup_duration_seconds",
            "Duration of secret store lookups in seconds",
        )
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
        &["provider"],
    )
    .expect("Failed to create SECRET_LOOKUP_DURATION metric - this should never happen")
});

/// Register provider metrics with the registry
pub(crate) fn register_provider_metrics() -> Result<()> {
    REGISTRY.register(Box::new(SECRET_LOOKUPS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(SECRET_LOOKUP_DURATION.clone()))?;
    Ok(())
}

/// Record a finished lookup
///
/// `outcome` is `success` or a [`crate::provider::SecretStoreErrorKind`] label.
pub fn record_secret_lookup(provider: &str, outcome: &str, duration_secs: f64) {
    SECRET_LOOKUPS_TOTAL
        .with_label_values(&[provider, outcome])
        .inc();
    SECRET_LOOKUP_DURATION
        .with_label_values(&[provider])
        .observe(duration_secs);
}
