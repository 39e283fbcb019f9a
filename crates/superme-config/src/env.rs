//! Environment-variable credential resolution.
//!
//! Resolution order:
//! 1. `SUPERME_API_KEY` (API-key auth)
//! 2. `SUPERME_USERNAME` + `SUPERME_PASSWORD` (password auth)
//!
//! `SUPERME_BASE_URL` overrides the base URL in either case.
//! `SUPERME_CONFIG` names the config file to load instead of the default.

use superme_common::ConfigError;
use tracing::debug;

use crate::schema::{AuthConfig, ClientConfig};

pub const API_KEY_VAR: &str = "SUPERME_API_KEY";
pub const USERNAME_VAR: &str = "SUPERME_USERNAME";
pub const PASSWORD_VAR: &str = "SUPERME_PASSWORD";
pub const BASE_URL_VAR: &str = "SUPERME_BASE_URL";
pub const CONFIG_PATH_VAR: &str = "SUPERME_CONFIG";

impl ClientConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if !config.apply_overrides(&lookup) {
            return Err(ConfigError::MissingCredentials(format!(
                "set {API_KEY_VAR}, or {USERNAME_VAR} and {PASSWORD_VAR}"
            )));
        }
        Ok(config)
    }

    /// Overlay environment credentials and base URL onto a loaded config.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(&|name: &str| std::env::var(name).ok());
    }

    /// Returns whether credentials were found.
    fn apply_overrides<F>(&mut self, lookup: &F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(url) = non_empty(BASE_URL_VAR) {
            debug!(base_url = %url, "base URL from environment");
            self.base_url = url;
        }

        if let Some(api_key) = non_empty(API_KEY_VAR) {
            debug!("API key from environment");
            self.auth = AuthConfig::ApiKey { api_key };
            return true;
        }

        if let (Some(username), Some(password)) = (non_empty(USERNAME_VAR), non_empty(PASSWORD_VAR))
        {
            debug!(%username, "password credentials from environment");
            self.auth = AuthConfig::Password { username, password };
            return true;
        }

        false
    }
}
