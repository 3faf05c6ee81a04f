//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     trigger() → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - The signal owner and the server are separate halves, so tests and
//!   embedders can stop the server without process signals
//! - Ctrl+C wiring lives in main.rs; the library never installs handlers

pub mod shutdown;

pub use shutdown::{ShutdownHandle, ShutdownSignal};
