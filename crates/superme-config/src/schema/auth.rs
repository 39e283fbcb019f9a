use std::fmt;

use serde::{Deserialize, Serialize};

/// How the client authenticates. Exactly one mode per client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AuthConfig {
    /// The key itself is the bearer value; no login exchange.
    ApiKey { api_key: String },
    /// A login exchange trades these for a bearer token.
    Password { username: String, password: String },
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::ApiKey {
            api_key: String::new(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey { .. } => f
                .debug_struct("ApiKey")
                .field("api_key", &"[REDACTED]")
                .finish(),
            Self::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

impl AuthConfig {
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::ApiKey { .. } => "api_key",
            Self::Password { .. } => "password",
        }
    }
}

/// Metadata key under which the target identity travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKey {
    /// Numeric user id (password deployments).
    User,
    /// Username string (API-key deployments).
    Username,
}

impl IdentityKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Username => "username",
        }
    }
}
