//! Outbound request forwarding.
//!
//! # Responsibilities
//! - Parse the decoded relay target into an absolute URL
//! - Issue exactly one POST per relay request (no retries)
//! - Buffer the upstream response fully before relaying it
//! - Translate every failure into the client-facing JSON error shape
//!
//! # Design Decisions
//! - The upstream request always carries `Content-Type: application/json`;
//!   the relay exists for browser clients posting JSON to CORS-less APIs
//! - Redirects are not followed; 3xx responses pass through verbatim
//! - The response relays only status, body, and Content-Type (defaulting
//!   to `application/json` when the target sends none)

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use url::Url;

use crate::config::{LimitsConfig, TimeoutConfig};
use crate::relay::error::{error_chain, ForwardError};

/// Forwards relay requests to their decoded target URLs.
///
/// One forwarder is built at startup and shared across requests; the inner
/// client pools connections across targets.
pub struct Forwarder {
    client: reqwest::Client,
    request_timeout: Option<Duration>,
    max_body_bytes: usize,
}

impl Forwarder {
    /// Create a forwarder from the timeout and limit configuration.
    pub fn new(timeouts: &TimeoutConfig, limits: &LimitsConfig) -> Self {
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(secs) = timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        // Construction fails only when the TLS backend cannot initialize.
        let client = builder.build().expect("failed to build outbound HTTP client");

        Self {
            client,
            request_timeout: timeouts.upstream_secs.map(Duration::from_secs),
            max_body_bytes: limits.max_body_bytes,
        }
    }

    /// Forward a relay request and produce the client-facing response.
    ///
    /// On success the upstream status, body, and Content-Type come back as
    /// received. Any failure becomes a 500 with `{"error": "<message>"}`.
    pub async fn forward(&self, target: &str, body: Bytes) -> Response {
        match self.try_forward(target, body).await {
            Ok(response) => response,
            Err(err) => {
                let message = error_chain(&err);
                tracing::error!(url = %target, error = %message, "Relay failed");
                json_error_response(StatusCode::INTERNAL_SERVER_ERROR, &message)
            }
        }
    }

    async fn try_forward(&self, target: &str, body: Bytes) -> Result<Response, ForwardError> {
        let url = Url::parse(target)?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => return Err(ForwardError::UnsupportedScheme(scheme.to_string())),
        }

        tracing::debug!(url = %url, bytes = body.len(), "Sending upstream request");

        let mut request = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }

        let mut upstream = request.send().await.map_err(ForwardError::Upstream)?;

        let status = upstream.status();
        let content_type = upstream
            .headers()
            .get(header::CONTENT_TYPE)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));

        let mut buffered = Vec::new();
        while let Some(chunk) = upstream.chunk().await.map_err(ForwardError::Upstream)? {
            if buffered.len() + chunk.len() > self.max_body_bytes {
                return Err(ForwardError::ResponseTooLarge {
                    limit: self.max_body_bytes,
                });
            }
            buffered.extend_from_slice(&chunk);
        }

        tracing::debug!(status = %status, bytes = buffered.len(), "Upstream response buffered");

        let mut response = Response::new(Body::from(buffered));
        *response.status_mut() = status;
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        Ok(response)
    }
}

/// Build the JSON error shape reserved for relay-path failures.
pub(crate) fn json_error_response(status: StatusCode, message: &str) -> Response {
    let body = serde_json::json!({ "error": message }).to_string();
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
