//! SessionManager struct and the login exchange.

use superme_config::AuthConfig;
use tracing::{debug, info, warn};

use crate::ClientError;

use super::types::{BearerToken, LoginRequest, LoginResponse};

/// Owns one client's credentials and the token they produced.
pub struct SessionManager {
    credentials: AuthConfig,
    token: Option<BearerToken>,
    login_url: String,
    http: reqwest::Client,
}

impl SessionManager {
    /// API-key credentials start authenticated; password credentials
    /// start without a token.
    pub fn new(credentials: AuthConfig, login_url: impl Into<String>, http: reqwest::Client) -> Self {
        let token = match &credentials {
            AuthConfig::ApiKey { api_key } => Some(BearerToken::new(api_key.clone())),
            AuthConfig::Password { .. } => None,
        };
        Self {
            credentials,
            token,
            login_url: login_url.into(),
            http,
        }
    }

    /// Obtain a bearer token and store it, replacing any previous one.
    ///
    /// In API-key mode this returns the key without a network call. In
    /// password mode any failure leaves the stored token untouched.
    pub async fn login(&mut self) -> Result<BearerToken, ClientError> {
        let (username, password) = match &self.credentials {
            AuthConfig::ApiKey { api_key } => {
                let token = BearerToken::new(api_key.clone());
                self.token = Some(token.clone());
                return Ok(token);
            }
            AuthConfig::Password { username, password } => (username, password),
        };

        debug!(%username, url = %self.login_url, "login request");

        let response = self
            .http
            .post(&self.login_url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| ClientError::Authentication {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ClientError::Authentication {
            status: Some(status.as_u16()),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            warn!(%username, %status, "login rejected");
            return Err(ClientError::Authentication {
                status: Some(status.as_u16()),
                message: body,
            });
        }

        let parsed: LoginResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Authentication {
                status: Some(status.as_u16()),
                message: format!("malformed login response: {e}"),
            })?;

        if parsed.access_token.is_empty() {
            return Err(ClientError::Authentication {
                status: Some(status.as_u16()),
                message: "login response carried an empty token".into(),
            });
        }

        info!(%username, "logged in");
        let token = BearerToken::new(parsed.access_token);
        self.token = Some(token.clone());
        Ok(token)
    }

    /// The stored token, or the API key in API-key mode.
    pub fn current_token(&self) -> Option<&BearerToken> {
        self.token.as_ref()
    }

    /// The stored token, or `NotAuthenticated` when there is none.
    pub fn require_token(&self) -> Result<&BearerToken, ClientError> {
        self.token.as_ref().ok_or(ClientError::NotAuthenticated)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Name of the active auth mode, for logging.
    pub fn mode(&self) -> &'static str {
        self.credentials.mode_name()
    }
}
