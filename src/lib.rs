//! CORS-Bypassing HTTP Relay Library
//!
//! Accepts `POST /proxy/<percent-encoded-url>`, forwards the body to the
//! decoded target as JSON, and relays the answer back with permissive CORS
//! headers so browser pages can reach APIs that do not speak CORS
//! themselves. Every other request is served from a static file root.
//!
//! The relay forwards to whatever target the client encodes; deploy it for
//! trusted frontends, not as an open proxy on the public internet.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod relay;
pub mod routing;
pub mod static_files;

pub use config::RelayConfig;
pub use http::RelayServer;
pub use lifecycle::{ShutdownHandle, ShutdownSignal};
