//! # Request Metrics
//!
//! Metrics for HTTP handlers: outcomes per handler and input validation rejections.

use crate::observability::metrics::registry::REGISTRY;
use anyhow::Result;
use prometheus::IntCounterVec;
use std::sync::LazyLock;

static HTTP_REQUESTS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "keyvault_frontend_http_requests_total",
            "Total number of handled requests by handler and outcome",
        ),
        &["handler", "outcome"],
    )
    .expect("Failed to create HTTP_REQUESTS_TOTAL metric - this should never happen")
});

static VALIDATION_REJECTIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "keyvault_frontend_validation_rejections_total",
            "Total number of inputs rejected before reaching the secret store",
        ),
        &["reason"],
    )
    .expect("Failed to create VALIDATION_REJECTIONS_TOTAL metric - this should never happen")
});

/// Register request metrics with the registry
pub(crate) fn register_request_metrics() -> Result<()> {
    REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(VALIDATION_REJECTIONS_TOTAL.clone()))?;
    Ok(())
}

/// Count one handled request
///
/// `handler` is `page` or `api`; `outcome` is `echo`, `secret`, `rejected` or `error`.
pub fn record_request(handler: &str, outcome: &str) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[handler, outcome])
        .inc();
}

/// Count one rejected input, labeled `empty` or `too_long`
pub fn increment_validation_rejections(reason: &str) {
    VALIDATION_REJECTIONS_TOTAL.with_label_values(&[reason]).inc();
}
