//! SuperMe client configuration.
//!
//! TOML-based configuration with environment overrides and validation.
//! Every field has a default, so a config file only needs credentials.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use superme_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.base_url);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    AuthConfig, ClientConfig, EndpointsConfig, HttpConfig, IdentityKey, CONFIG_SCHEMA_VERSION,
    DEFAULT_BASE_URL,
};

use superme_common::ConfigError;

/// Load config from the platform default path, overlay environment
/// credentials, and validate the result.
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    config.apply_env_overrides();
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string with secrets masked.
pub fn config_to_json(config: &ClientConfig) -> String {
    let mut masked = config.clone();
    match &mut masked.auth {
        AuthConfig::ApiKey { api_key } => *api_key = "[REDACTED]".into(),
        AuthConfig::Password { password, .. } => *password = "[REDACTED]".into(),
    }
    serde_json::to_string_pretty(&masked)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
