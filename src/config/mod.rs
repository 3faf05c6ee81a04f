//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → RelayConfig (immutable)
//!     → consumed once at startup by server construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so the server runs with no config file at all
//! - A present-but-broken config file is fatal rather than silently ignored

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{LimitsConfig, ListenerConfig, RelayConfig, StaticFilesConfig, TimeoutConfig};
