//! Static file collaborator.
//!
//! # Responsibilities
//! - Serve files from the configured root for every request the relay
//!   does not claim
//! - Map `/` to the configured index file
//! - Answer 404/500 in plain text, never the relay's JSON error shape
//!
//! # Design Decisions
//! - Request paths are used as-is (no percent-decoding); a file with an
//!   encoded name on disk is addressed by that encoded form
//! - Only plain path components are accepted, so `..` traversal cannot
//!   escape the root
//! - Files are read whole; this collaborator serves small site assets,
//!   not large downloads

pub mod mime;

use std::path::{Component, Path, PathBuf};

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::config::StaticFilesConfig;

/// Serves files for every request the relay does not claim.
pub struct StaticFiles {
    root: PathBuf,
    index_file: String,
}

impl StaticFiles {
    /// Create a collaborator serving from the configured root.
    pub fn new(config: &StaticFilesConfig) -> Self {
        Self {
            root: config.root.clone(),
            index_file: config.index_file.clone(),
        }
    }

    /// Serve the asset at the given request path.
    pub async fn serve(&self, path: &str) -> Response {
        let Some(file_path) = self.resolve(path) else {
            return not_found();
        };

        match tokio::fs::read(&file_path).await {
            Ok(content) => {
                let extension = file_path.extension().and_then(|ext| ext.to_str());
                let content_type = mime::content_type_for(extension);
                tracing::debug!(path = %file_path.display(), content_type, "Serving static file");
                ([(header::CONTENT_TYPE, content_type)], content).into_response()
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => not_found(),
            Err(err) => {
                tracing::warn!(path = %file_path.display(), error = %err, "Static file read failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
            }
        }
    }

    /// Resolve a request path to a file under the root.
    ///
    /// `/` maps to the index file. Paths containing anything other than
    /// plain components (`..`, a second root) resolve to nothing.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = if path == "/" {
            self.index_file.as_str()
        } else {
            path.trim_start_matches('/')
        };

        let relative = Path::new(relative);
        let plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if !plain || relative.as_os_str().is_empty() {
            return None;
        }

        Some(self.root.join(relative))
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}
