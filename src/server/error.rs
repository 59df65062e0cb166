//! # API Errors
//!
//! Maps rejected input and secret store failures to JSON error responses.
//!
//! Error bodies always carry `error`, `message` and `secretName`. With debug errors
//! enabled they also carry `keyVaultUrl`, `exceptionType` and `stackTrace`, and
//! `message` becomes the store's raw message. No error body ever contains a secret value.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::constants::MSG_RETRIEVE_FAILED;
use crate::provider::{SecretStoreError, SecretStoreErrorKind};
use crate::validation::ValidationError;

/// Failure of an API request
#[derive(Debug)]
pub enum ApiError {
    /// The path name failed validation; the store was not called
    InvalidInput {
        secret_name: String,
        error: ValidationError,
    },
    /// The store call failed
    Store {
        error: SecretStoreError,
        vault_url: String,
        debug: bool,
    },
}

/// HTTP status for a store failure
pub fn status_for_kind(kind: SecretStoreErrorKind) -> StatusCode {
    match kind {
        SecretStoreErrorKind::NotFound => StatusCode::NOT_FOUND,
        SecretStoreErrorKind::Unauthorized => StatusCode::FORBIDDEN,
        SecretStoreErrorKind::Throttled => StatusCode::TOO_MANY_REQUESTS,
        SecretStoreErrorKind::Unavailable => StatusCode::BAD_GATEWAY,
        SecretStoreErrorKind::InvalidResponse | SecretStoreErrorKind::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::Store { error, .. } => status_for_kind(error.kind()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
    secret_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_vault_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exception_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack_trace: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::InvalidInput { secret_name, error } => ErrorBody {
                error: "Invalid secret name",
                message: error.to_string(),
                secret_name,
                key_vault_url: None,
                exception_type: None,
                stack_trace: None,
            },
            Self::Store {
                error,
                vault_url,
                debug: true,
            } => ErrorBody {
                error: MSG_RETRIEVE_FAILED,
                message: error.message().to_string(),
                secret_name: error.secret_name(),
                key_vault_url: Some(vault_url),
                exception_type: Some(error.kind().type_name()),
                stack_trace: Some(error.chain()),
            },
            Self::Store { error, .. } => ErrorBody {
                error: MSG_RETRIEVE_FAILED,
                message: error.kind().description().to_string(),
                secret_name: error.secret_name(),
                key_vault_url: None,
                exception_type: None,
                stack_trace: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
