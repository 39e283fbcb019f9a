//! Configuration schema types for the SuperMe client.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Credentials have no usable default; validation rejects an empty key.

mod auth;
mod endpoints;
mod http;

pub use auth::*;
pub use endpoints::*;
pub use http::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.superme.ai";

/// Root configuration for a SuperMe client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the API; self-hosted and local deployments override it.
    pub base_url: String,
    /// Log in while constructing the client.
    pub auto_login: bool,
    /// Model name sent with every completion request.
    pub model: String,
    /// Default `max_tokens` for `ask` calls.
    pub max_tokens: u32,
    /// Metadata key carrying the target identity. Derived from the auth
    /// mode when unset.
    pub identity_key: Option<IdentityKey>,
    pub auth: AuthConfig,
    pub endpoints: EndpointsConfig,
    pub http: HttpConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            auto_login: true,
            model: "gpt-4".into(),
            max_tokens: 1000,
            identity_key: None,
            auth: AuthConfig::default(),
            endpoints: EndpointsConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Config authenticating with an API key.
    pub fn from_api_key(api_key: impl Into<String>) -> Self {
        Self {
            auth: AuthConfig::ApiKey {
                api_key: api_key.into(),
            },
            ..Self::default()
        }
    }

    /// Config authenticating with a username and password.
    pub fn from_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            auth: AuthConfig::Password {
                username: username.into(),
                password: password.into(),
            },
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_auto_login(mut self, auto_login: bool) -> Self {
        self.auto_login = auto_login;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_identity_key(mut self, key: IdentityKey) -> Self {
        self.identity_key = Some(key);
        self
    }

    /// Base URL without trailing slashes.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Absolute URL for an endpoint path such as `/mcp`.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.trimmed_base_url(), path)
    }

    /// The identity metadata key in effect: the explicit setting, else
    /// `user` for password deployments and `username` for API-key ones.
    pub fn effective_identity_key(&self) -> IdentityKey {
        self.identity_key.unwrap_or(match self.auth {
            AuthConfig::Password { .. } => IdentityKey::User,
            AuthConfig::ApiKey { .. } => IdentityKey::Username,
        })
    }
}
