//! CORS-Bypassing HTTP Relay
//!
//! A small relay built with Tokio and Axum: browser pages POST to
//! `/proxy/<percent-encoded-url>` and get the target's answer back with
//! permissive CORS headers; every other request is served from a static
//! file root.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────┐
//!                      │                 CORS RELAY                  │
//!                      │                                             │
//!   Client Request     │  ┌─────────┐    ┌──────────┐               │
//!   ──────────────────▶│  │  http   │───▶│ routing  │               │
//!                      │  │ server  │    │ classify │               │
//!                      │  └─────────┘    └────┬─────┘               │
//!                      │                      │                      │
//!                      │        POST /proxy/  │  everything else     │
//!                      │             ▼        ▼                      │
//!                      │      ┌───────────┐  ┌──────────────┐       │
//!   Client Response    │      │   relay   │  │ static_files │       │
//!   ◀──────────────────│──────│ forwarder │  │ collaborator │◀──────│──── disk
//!                      │      └─────┬─────┘  └──────────────┘       │
//!                      │            │                                │
//!                      └────────────┼────────────────────────────────┘
//!                                   ▼
//!                              target URL
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cors_relay::config;
use cors_relay::http::RelayServer;
use cors_relay::lifecycle::ShutdownSignal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cors_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("cors-relay v0.1.0 starting");

    let config = config::load_or_default()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        static_root = %config.static_files.root.display(),
        max_body_bytes = config.limits.max_body_bytes,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    // Ctrl+C triggers graceful shutdown
    let shutdown = ShutdownSignal::new();
    let handle = shutdown.handle();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Shutdown signal received");
        shutdown.trigger();
    });

    let server = RelayServer::new(config);
    server.run(listener, handle).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
