//! Where the config file lives, and seeding it from the template.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use superme_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;
use crate::env::CONFIG_PATH_VAR;

/// `$SUPERME_CONFIG` if set, else `<config dir>/superme/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(|name| std::env::var(name).ok())
}

pub(crate) fn resolve_config_path<F>(lookup: F) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(explicit) = lookup(CONFIG_PATH_VAR).filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(explicit));
    }
    let base = dirs::config_dir().ok_or_else(|| {
        ConfigError::ParseError(format!(
            "no platform config directory; set {CONFIG_PATH_VAR} to a config file path"
        ))
    })?;
    Ok(base.join("superme").join("config.toml"))
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is left alone.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |at: &Path, source: std::io::Error| ConfigError::Io {
        path: at.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "config already present, template not written");
            return Ok(());
        }
        Err(e) => return Err(io_err(path, e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err(path, e))?;

    info!(path = %path.display(), "wrote default config template");
    Ok(())
}
