use crate::schema::{AuthConfig, ClientConfig};

/// Credentials must be present for whichever mode is selected.
pub(crate) fn validate_credentials(errors: &mut Vec<String>, config: &ClientConfig) {
    match &config.auth {
        AuthConfig::ApiKey { api_key } => {
            if api_key.trim().is_empty() {
                errors.push("auth.api_key is empty".into());
            }
        }
        AuthConfig::Password { username, password } => {
            if username.trim().is_empty() {
                errors.push("auth.username is empty".into());
            }
            if password.is_empty() {
                errors.push("auth.password is empty".into());
            }
        }
    }
}
