//! # Metrics Module
//!
//! Prometheus metrics, organized by responsibility.
//!
//! ## Sub-modules
//!
//! - `registry` - Metrics registry setup, registration and text exposition
//! - `request_metrics` - HTTP handler outcomes and input validation rejections
//! - `provider_metrics` - Secret store lookups (outcome counts and latency)

pub mod provider_metrics;
pub mod registry;
pub mod request_metrics;

pub use provider_metrics::*;
pub use registry::*;
pub use request_metrics::*;
