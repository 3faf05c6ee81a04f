//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the single catch-all dispatcher
//! - Wire up middleware (CORS decoration, tracing)
//! - Bind to the listener and serve until shutdown is triggered
//! - Classify each request and hand it to the forwarder or the static
//!   file collaborator
//!
//! # Data Flow
//! ```text
//! Request
//!     → cors middleware (OPTIONS answered here)
//!     → dispatch (classify once)
//!     → Relay: buffer body → Forwarder::forward
//!     → StaticAsset: StaticFiles::serve
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware,
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::cors;
use crate::lifecycle::ShutdownHandle;
use crate::relay::{error_chain, json_error_response, Forwarder};
use crate::routing::{self, RequestKind, PROXY_PREFIX};
use crate::static_files::StaticFiles;

/// Application state injected into the dispatcher.
#[derive(Clone)]
struct AppState {
    forwarder: Arc<Forwarder>,
    static_files: Arc<StaticFiles>,
    max_body_bytes: usize,
}

/// HTTP server for the relay.
///
/// Owns the router and configuration; `run` consumes the server and
/// returns once shutdown has been triggered and in-flight requests have
/// drained.
pub struct RelayServer {
    router: Router,
    config: RelayConfig,
}

impl RelayServer {
    /// Create a new server from the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let state = AppState {
            forwarder: Arc::new(Forwarder::new(&config.timeouts, &config.limits)),
            static_files: Arc::new(StaticFiles::new(&config.static_files)),
            max_body_bytes: config.limits.max_body_bytes,
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(middleware::from_fn(cors::cross_origin))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownHandle) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Relay server listening");
        tracing::info!(root = %self.config.static_files.root.display(), "Serving static files");
        tracing::info!("Relay endpoint: POST {}<encoded-url>", PROXY_PREFIX);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.triggered())
            .await?;

        tracing::info!("Relay server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Catch-all dispatcher.
/// Classifies the request once, then delegates.
async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();

    match routing::classify(&parts.method, &parts.uri) {
        RequestKind::Relay { target } => {
            let bytes = match axum::body::to_bytes(body, state.max_body_bytes).await {
                Ok(bytes) => bytes,
                Err(err) if is_length_limited(&err) => {
                    tracing::warn!(
                        url = %target,
                        limit = state.max_body_bytes,
                        error = %err,
                        "Relay request body too large"
                    );
                    return json_error_response(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        &format!("request body exceeds the {} byte limit", state.max_body_bytes),
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        url = %target,
                        error = %error_chain(&err),
                        "Relay request body read failed"
                    );
                    return json_error_response(
                        StatusCode::BAD_REQUEST,
                        "failed to read request body",
                    );
                }
            };

            tracing::info!(url = %target, bytes = bytes.len(), "Relaying request");
            state.forwarder.forward(&target, bytes).await
        }
        RequestKind::StaticAsset { path } => state.static_files.serve(&path).await,
    }
}

/// True when a body read failed on the size cap rather than on the wire.
fn is_length_limited(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = Some(err);
    while let Some(cause) = source {
        if cause
            .downcast_ref::<http_body_util::LengthLimitError>()
            .is_some()
        {
            return true;
        }
        source = cause.source();
    }
    false
}
