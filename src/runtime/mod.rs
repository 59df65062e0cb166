//! # Runtime Module
//!
//! Process startup: crypto provider, logging, metrics, configuration and the
//! secret store client.

pub mod initialization;

pub use initialization::*;
