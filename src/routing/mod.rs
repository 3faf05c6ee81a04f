//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, uri)
//!     → classify (single decision, evaluated once per request)
//!     → RequestKind::Relay { target }  (POST under /proxy/)
//!     → RequestKind::StaticAsset { path }  (everything else)
//! ```
//!
//! # Design Decisions
//! - Exactly one rule: POST with a `/proxy/` path prefix is relayed,
//!   anything else is treated as a static asset request
//! - The relay target is the percent-decoded remainder of the request
//!   path and query, so encoded targets keep their own query strings
//! - Decoding is lossy on invalid UTF-8; a garbled target fails URL
//!   parsing downstream instead of crashing the server

use axum::http::{Method, Uri};
use percent_encoding::percent_decode_str;

/// Path prefix that marks a request for relaying.
pub const PROXY_PREFIX: &str = "/proxy/";

/// What a request asks the server to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// Forward the request body to the decoded target URL.
    Relay { target: String },

    /// Serve a file from the static root.
    StaticAsset { path: String },
}

/// Classify a request by method and URI.
///
/// The target for a relay request is everything after `/proxy/`, query
/// string included, percent-decoded as a whole.
pub fn classify(method: &Method, uri: &Uri) -> RequestKind {
    if *method == Method::POST {
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());

        if let Some(encoded) = path_and_query.strip_prefix(PROXY_PREFIX) {
            let target = percent_decode_str(encoded).decode_utf8_lossy().into_owned();
            return RequestKind::Relay { target };
        }
    }

    RequestKind::StaticAsset {
        path: uri.path().to_string(),
    }
}
