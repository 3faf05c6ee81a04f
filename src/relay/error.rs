//! Relay error definitions.

use thiserror::Error;

/// Errors that can occur while forwarding a relay request.
///
/// Every variant becomes a client-visible 500 with a JSON body; this enum
/// is the single place upstream failures are described.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The decoded target is not a parseable absolute URL.
    #[error("invalid target URL")]
    InvalidTarget(#[from] url::ParseError),

    /// The target URL uses a scheme the outbound client cannot speak.
    #[error("unsupported target scheme `{0}`")]
    UnsupportedScheme(String),

    /// The outbound call failed (connect, send, read, or timeout).
    #[error("upstream request failed")]
    Upstream(#[source] reqwest::Error),

    /// The upstream response body outgrew the configured buffer limit.
    #[error("upstream response exceeds the {limit} byte limit")]
    ResponseTooLarge { limit: usize },
}

/// Flatten an error and its source chain into one message.
///
/// Produces `"outer: cause: root cause"` so the client-facing JSON error
/// carries the useful detail that is otherwise buried in `source()`.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
