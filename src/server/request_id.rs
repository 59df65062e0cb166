//! # Request Correlation
//!
//! Tags every request with an id, reusing the caller's `x-request-id` when it is a
//! valid header value and generating a UUID v4 otherwise.

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::constants::REQUEST_ID_HEADER;

/// Correlation id of the current request, available as a request extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

pub async fn request_id_layer(mut req: Request<Body>, next: Next) -> Response {
    let incoming = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .filter(|value| !value.is_empty() && value.len() <= 128)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    let id = incoming.unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(id.clone()));

    let span = info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id = %id
    );

    let mut response = next.run(req).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
