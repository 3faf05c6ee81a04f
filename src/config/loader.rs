//! Configuration loading from disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// Environment variable naming the config file to load.
pub const CONFIG_ENV_VAR: &str = "CORS_RELAY_CONFIG";

/// Path tried when the environment variable is unset.
const DEFAULT_CONFIG_PATH: &str = "relay.toml";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config)
}

/// Load configuration from the path named by `CORS_RELAY_CONFIG`, falling
/// back to `relay.toml` in the working directory.
///
/// A missing file is not an error; the built-in defaults are used instead.
/// A file that exists but cannot be read or parsed is fatal.
pub fn load_or_default() -> Result<RelayConfig, ConfigError> {
    let path = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let path = Path::new(&path);

    if !path.exists() {
        tracing::info!(path = %path.display(), "No config file found, using built-in defaults");
        return Ok(RelayConfig::default());
    }

    tracing::info!(path = %path.display(), "Loading config file");
    load_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_valid_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("relay.toml");
        std::fs::write(
            &path,
            r#"
            [listener]
            bind_address = "127.0.0.1:4000"

            [limits]
            max_body_bytes = 1024
            "#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:4000");
        assert_eq!(config.limits.max_body_bytes, 1024);
    }

    #[test]
    fn test_malformed_config_file_is_a_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("relay.toml");
        std::fs::write(&path, "listener = not toml at all [").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_config_file_is_an_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.toml");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
