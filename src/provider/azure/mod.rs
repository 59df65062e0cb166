//! # Azure Providers
//!
//! Azure-backed secret stores.

pub mod key_vault;

pub use key_vault::AzureKeyVault;
