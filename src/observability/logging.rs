//! # Logging
//!
//! Tracing subscriber setup. `RUST_LOG` wins when set; otherwise
//! [`DEFAULT_LOG_FILTER`](crate::constants::DEFAULT_LOG_FILTER) applies.

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_FILTER;

/// Install the global `fmt` subscriber
///
/// Safe to call more than once; later calls log a warning and keep the first subscriber.
pub fn init_tracing() {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .try_init()
    {
        warn!("Tracing subscriber already initialized: {}", e);
    }
}
