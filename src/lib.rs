//! Key Vault Secret Front End Library
//!
//! Request handling, validation, rendering and the Key Vault client behind the
//! `keyvault-secret-frontend` binary. Exposed as a library so the router can be
//! exercised in integration tests with a stand-in [`provider::SecretStore`].

pub mod cli;
pub mod config;
pub mod constants;
pub mod observability;
pub mod provider;
pub mod render;
pub mod runtime;
pub mod server;
pub mod validation;

pub use provider::{SecretStore, SecretStoreError, SecretStoreErrorKind, SecretValue};
pub use server::{router, AppState};
