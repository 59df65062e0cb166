//! # Secret API
//!
//! `GET /api/secret/{secretName}`: JSON lookup of a named secret.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error, info};

use super::{ApiError, AppState};
use crate::observability::metrics;
use crate::validation::validate_input;

/// Successful lookup body
#[derive(Debug, Serialize)]
pub struct SecretResponse<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

pub async fn get_secret(
    State(state): State<AppState>,
    Path(secret_name): Path<String>,
    headers: HeaderMap,
) -> Response {
    info!("Retrieving secret: {}", secret_name);
    debug!(
        forwarded_for = header_str(&headers, "x-forwarded-for"),
        forwarded_proto = header_str(&headers, "x-forwarded-proto"),
        vault_url = state.store.vault_url(),
        "Secret API request"
    );

    if state.settings.validate_api_names {
        if let Err(e) = validate_input(Some(&secret_name), state.settings.max_message_length) {
            debug!(reason = e.reason(), "Rejected secret name");
            metrics::increment_validation_rejections(e.reason());
            metrics::record_request("api", "rejected");
            return ApiError::InvalidInput {
                secret_name,
                error: e,
            }
            .into_response();
        }
    }

    match state.store.get_secret(&secret_name).await {
        Ok(value) => {
            info!("Successfully retrieved secret: {}", secret_name);
            metrics::record_request("api", "secret");
            Json(SecretResponse {
                name: &secret_name,
                value: value.expose(),
            })
            .into_response()
        }
        Err(e) => {
            error!(
                error.kind = e.kind().as_str(),
                "Failed to retrieve secret: {}: {}",
                secret_name,
                e.chain()
            );
            metrics::record_request("api", "error");
            ApiError::Store {
                error: e,
                vault_url: state.store.vault_url().to_string(),
                debug: state.settings.debug_errors,
            }
            .into_response()
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}
