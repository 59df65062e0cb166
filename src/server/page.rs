//! # Form Front End
//!
//! The input page and its form submission. Blank and oversized input is rejected
//! locally; the secret keyword triggers a lookup of the configured secret; anything
//! else is echoed back.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::Extension;
use serde::Deserialize;
use tracing::{debug, error, info};

use super::{AppState, RequestId};
use crate::constants::MSG_PROCESS_FAILED;
use crate::observability::metrics;
use crate::provider::SecretStoreError;
use crate::render::{render_error_page, IndexView};
use crate::validation::{classify_message, validate_input, PageAction};

/// Form body of `POST /` and `POST /Home/GetSecret`
#[derive(Debug, Deserialize)]
pub struct SecretForm {
    #[serde(rename = "secretName")]
    pub secret_name: Option<String>,
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(IndexView::new(state.settings.max_message_length).render())
}

/// `POST /` and `POST /Home/GetSecret`
///
/// A body that is not a form (or no body at all) counts as an absent field.
pub async fn get_secret(
    State(state): State<AppState>,
    form: Result<Form<SecretForm>, FormRejection>,
) -> Html<String> {
    let form = form.map_or_else(
        |rejection| {
            debug!("Unreadable form body, treating as empty: {}", rejection);
            SecretForm { secret_name: None }
        },
        |Form(form)| form,
    );
    let settings = &state.settings;
    let view = IndexView::new(settings.max_message_length);

    let input = match validate_input(form.secret_name.as_deref(), settings.max_message_length) {
        Ok(input) => input,
        Err(e) => {
            debug!(reason = e.reason(), "Rejected page input");
            metrics::increment_validation_rejections(e.reason());
            metrics::record_request("page", "rejected");
            return Html(view.with_error(e.to_string()).render());
        }
    };

    match classify_message(input, &settings.secret_keyword) {
        PageAction::Echo(message) => {
            info!("Message received: {}", message);
            metrics::record_request("page", "echo");
            Html(view.with_echo(message).render())
        }
        PageAction::LookupSecret => {
            let secret_name = settings.default_secret_name.as_str();
            info!("Secret keyword detected, attempting to retrieve secret from Key Vault");

            match state.store.get_secret(secret_name).await {
                Ok(value) => {
                    info!("Successfully retrieved secret: {}", secret_name);
                    metrics::record_request("page", "secret");
                    let html = view.with_secret(secret_name, value.expose()).render();
                    Html(html)
                }
                Err(e) => {
                    error!(
                        error.kind = e.kind().as_str(),
                        "Failed to process request for secret {}: {}",
                        secret_name,
                        e.chain()
                    );
                    metrics::record_request("page", "error");
                    Html(view.with_error(failure_banner(&e, settings.debug_errors)).render())
                }
            }
        }
    }
}

/// `GET /Home/Error`
pub async fn error_page(request_id: Option<Extension<RequestId>>) -> Response {
    let id = request_id.map(|Extension(RequestId(id))| id);
    (
        [(header::CACHE_CONTROL, "no-store, no-cache")],
        Html(render_error_page(id.as_deref())),
    )
        .into_response()
}

/// Banner text for a failed lookup; the raw store message only appears in debug mode
fn failure_banner(error: &SecretStoreError, debug: bool) -> String {
    if debug {
        format!("{MSG_PROCESS_FAILED}: {}", error.message())
    } else {
        format!("{MSG_PROCESS_FAILED}: {}", error.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SecretStoreErrorKind;

    #[test]
    fn test_failure_banner_hides_raw_message_by_default() {
        let err = SecretStoreError::new(
            SecretStoreErrorKind::Unauthorized,
            "my-secret",
            "HTTP 403 from https://internal.vault.azure.net/ caller oid=abc",
        );
        assert_eq!(
            failure_banner(&err, false),
            "Failed to process request: access to the secret store was denied"
        );
        assert!(failure_banner(&err, true).contains("oid=abc"));
    }
}
