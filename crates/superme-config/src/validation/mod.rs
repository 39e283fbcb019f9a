//! Full configuration validation.
//!
//! Each check pushes a message onto a shared list; the orchestrator joins
//! them into a single `ConfigError` so a user sees every problem at once.

mod auth;
mod connection;


use crate::schema::ClientConfig;
use superme_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ClientConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    connection::validate_base_url(&mut errors, config);
    connection::validate_endpoints(&mut errors, config);
    connection::validate_request(&mut errors, config);
    auth::validate_credentials(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
