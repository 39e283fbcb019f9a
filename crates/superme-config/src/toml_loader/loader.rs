//! Core TOML config loading: read from path or platform default.

use crate::schema::ClientConfig;
use crate::validation;
use std::path::Path;
use superme_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. Validation problems are logged but
/// do not fail the load; credentials may still arrive from the environment.
pub fn load_from_path(path: &Path) -> Result<ClientConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: ClientConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config loaded with problems: {e}");
    }

    info!(path = %path.display(), mode = config.auth.mode_name(), "config loaded");
    Ok(config)
}

/// Load config from `default_config_path()`.
///
/// On macOS: `~/Library/Application Support/superme/config.toml`
/// On Linux: `~/.config/superme/config.toml`
/// `SUPERME_CONFIG` replaces either.
///
/// If the file does not exist, writes the commented template and returns
/// defaults.
pub fn load_default() -> Result<ClientConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config file, seeding template");
            create_default_config(&path)?;
            Ok(ClientConfig::default())
        }
        Err(e) => Err(e),
    }
}
