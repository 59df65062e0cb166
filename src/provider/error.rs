//! # Secret Store Errors
//!
//! Typed failures from a secret store lookup. Each failure carries a
//! [`SecretStoreErrorKind`] so the HTTP layer can pick a status code without
//! inspecting messages.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Broad category of a failed lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretStoreErrorKind {
    /// The secret does not exist (or has no current value)
    NotFound,
    /// The process identity could not authenticate or lacks permission
    Unauthorized,
    /// The store rejected the call for rate limiting
    Throttled,
    /// The store could not be reached or reported itself unavailable
    Unavailable,
    /// The store answered with a body that could not be understood
    InvalidResponse,
    /// Anything else
    Internal,
}

impl SecretStoreErrorKind {
    /// Short machine-readable label, used for metrics and log fields
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Unauthorized => "unauthorized",
            Self::Throttled => "throttled",
            Self::Unavailable => "unavailable",
            Self::InvalidResponse => "invalid_response",
            Self::Internal => "internal",
        }
    }

    /// Type name reported in debug diagnostics
    pub fn type_name(self) -> &'static str {
        match self {
            Self::NotFound => "SecretNotFound",
            Self::Unauthorized => "Unauthorized",
            Self::Throttled => "Throttled",
            Self::Unavailable => "StoreUnavailable",
            Self::InvalidResponse => "InvalidResponse",
            Self::Internal => "InternalError",
        }
    }

    /// Human-readable description that is safe to show to end users
    pub fn description(self) -> &'static str {
        match self {
            Self::NotFound => "secret not found",
            Self::Unauthorized => "access to the secret store was denied",
            Self::Throttled => "the secret store is throttling requests",
            Self::Unavailable => "the secret store is unavailable",
            Self::InvalidResponse => "the secret store returned an unexpected response",
            Self::Internal => "an internal error occurred",
        }
    }

    /// Classify an HTTP status returned by the store
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::NotFound,
            401 | 403 => Self::Unauthorized,
            429 => Self::Throttled,
            408 | 502 | 503 | 504 => Self::Unavailable,
            _ => Self::Internal,
        }
    }

    /// Classify an SDK error message that carries no HTTP status
    ///
    /// Status codes are only recognized as whole tokens, so digits inside ids and
    /// GUIDs are ignored. Service error codes come next and free text last, since
    /// Key Vault permission errors mention unrelated lookups that were "not found".
    pub fn from_message(message: &str) -> Self {
        let lower = message.to_ascii_lowercase();

        let status = lower
            .split(|c: char| !c.is_ascii_alphanumeric())
            .find_map(|token| match token {
                "401" | "403" | "404" | "408" | "429" | "502" | "503" | "504" => {
                    token.parse::<u16>().ok()
                }
                _ => None,
            });
        if let Some(status) = status {
            return Self::from_status(status);
        }

        let has = |needles: &[&str]| needles.iter().any(|needle| lower.contains(needle));
        if has(&[
            "forbidden",
            "unauthorized",
            "authenticationfailed",
            "credential",
            "access token",
        ]) {
            Self::Unauthorized
        } else if has(&["secretnotfound", "notfound"]) {
            Self::NotFound
        } else if has(&["throttled", "too many requests", "toomanyrequests"]) {
            Self::Throttled
        } else if has(&[
            "serviceunavailable",
            "service unavailable",
            "timed out",
            "timeout",
            "connection",
            "dns error",
        ]) {
            Self::Unavailable
        } else if has(&["not found"]) {
            Self::NotFound
        } else {
            Self::Internal
        }
    }
}

impl fmt::Display for SecretStoreErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A failed secret lookup
#[derive(Debug, Error)]
#[error("failed to get secret {secret_name:?}: {kind}: {message}")]
pub struct SecretStoreError {
    kind: SecretStoreErrorKind,
    secret_name: String,
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl SecretStoreError {
    pub fn new(
        kind: SecretStoreErrorKind,
        secret_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            secret_name: secret_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Build an error from an SDK failure
    ///
    /// The HTTP status decides the kind when the SDK reports one; otherwise the
    /// message is classified.
    pub fn from_sdk<E>(secret_name: impl Into<String>, status: Option<u16>, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = error.to_string();
        Self {
            kind: status.map_or_else(
                || SecretStoreErrorKind::from_message(&message),
                SecretStoreErrorKind::from_status,
            ),
            secret_name: secret_name.into(),
            message,
            source: Some(Box::new(error)),
        }
    }

    /// Attach the underlying error
    #[must_use]
    pub fn with_source<E>(mut self, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(error));
        self
    }

    pub fn kind(&self) -> SecretStoreErrorKind {
        self.kind
    }

    pub fn secret_name(&self) -> &str {
        &self.secret_name
    }

    /// Raw message from the store; may contain internal details
    pub fn message(&self) -> &str {
        &self.message
    }

    /// This error followed by each error in its source chain, one per line
    pub fn chain(&self) -> String {
        let mut lines = vec![self.to_string()];
        let mut current = StdError::source(self);
        while let Some(err) = current {
            lines.push(format!("caused by: {err}"));
            current = err.source();
        }
        lines.join("\n")
    }
}
