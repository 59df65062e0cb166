//! # Secret Store Providers
//!
//! The [`SecretStore`] trait is the seam between request handlers and the remote
//! secret service. Handlers only see this trait; the production implementation is
//! [`azure::key_vault::AzureKeyVault`].

use std::fmt;

use async_trait::async_trait;
use zeroize::Zeroizing;

pub mod azure;
mod error;

pub use error::{SecretStoreError, SecretStoreErrorKind};

/// A secret value fetched from the store
///
/// The backing buffer is zeroed on drop and `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretValue(Zeroizing<String>);

impl SecretValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Borrow the plaintext value
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretValue(<redacted>)")
    }
}

/// Read access to a remote secret store
///
/// Implementations are constructed once at startup and shared across all requests,
/// so they must be safe to call concurrently and must not mutate after construction.
#[async_trait]
pub trait SecretStore: Send + Sync + fmt::Debug {
    /// Fetch the latest version of the secret called `name`
    async fn get_secret(&self, name: &str) -> Result<SecretValue, SecretStoreError>;

    /// Base address of the store, reported in debug diagnostics
    fn vault_url(&self) -> &str;
}
