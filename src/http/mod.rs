//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all dispatch)
//!     → cors.rs (preflights answered, every response decorated)
//!     → relay or static file collaborator
//!     → Send to client
//! ```

pub mod cors;
pub mod server;

pub use server::RelayServer;
