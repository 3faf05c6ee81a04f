//! Relay subsystem.
//!
//! # Data Flow
//! ```text
//! decoded target + buffered request body
//!     → forwarder.rs (single outbound POST, no retries)
//!     → upstream response buffered whole
//!     → status / body / Content-Type relayed back
//!
//! On any failure:
//!     error.rs (ForwardError, source chain flattened)
//!     → 500 {"error": "<message>"}
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound call and one client response per relay request
//! - All failure translation lives here; other modules never synthesize
//!   the relay error shape themselves

pub mod error;
pub mod forwarder;

pub use error::{error_chain, ForwardError};
pub use forwarder::Forwarder;

pub(crate) use forwarder::json_error_response;
