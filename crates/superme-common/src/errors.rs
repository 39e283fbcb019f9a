//! Configuration failures shared by the config and client crates.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    /// Reading, writing, or creating a config path failed.
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing credentials: {0}")]
    MissingCredentials(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("base_url is empty".into());
        assert_eq!(err.to_string(), "config validation error: base_url is empty");

        let err = ConfigError::Io {
            path: PathBuf::from("/etc/superme"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "config I/O error at /etc/superme: denied");

        let err = ConfigError::MissingCredentials("set SUPERME_API_KEY".into());
        assert_eq!(err.to_string(), "missing credentials: set SUPERME_API_KEY");
    }
}
