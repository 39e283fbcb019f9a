//! SuperMeClient struct, construction, and session access.

use std::sync::Arc;

use superme_config::{validation, ClientConfig};
use tracing::debug;

use crate::auth::{BearerToken, SessionManager};
use crate::compose::Composer;
use crate::transport::{build_http_client, ChatTransport, HttpTransport};
use crate::ClientError;

/// One authenticated view of a SuperMe deployment.
///
/// Each instance owns its token; independent clients never share one.
pub struct SuperMeClient {
    pub(crate) config: ClientConfig,
    pub(crate) session: SessionManager,
    pub(crate) http: reqwest::Client,
    pub(crate) transport: Arc<dyn ChatTransport>,
    pub(crate) composer: Composer,
}

impl SuperMeClient {
    /// Build a client over the default HTTP transport, logging in first
    /// when `auto_login` is set.
    pub async fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = build_http_client(&config)?;
        let transport = Arc::new(HttpTransport::from_config(&config, http.clone()));
        Self::build(config, http, transport).await
    }

    /// Build a client whose completions go through `transport`. Login and
    /// raw requests still use HTTP.
    pub async fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn ChatTransport>,
    ) -> Result<Self, ClientError> {
        let http = build_http_client(&config)?;
        Self::build(config, http, transport).await
    }

    async fn build(
        config: ClientConfig,
        http: reqwest::Client,
        transport: Arc<dyn ChatTransport>,
    ) -> Result<Self, ClientError> {
        validation::validate(&config)?;

        let session = SessionManager::new(
            config.auth.clone(),
            config.endpoint_url(&config.endpoints.login),
            http.clone(),
        );
        let composer = Composer {
            model: config.model.clone(),
            identity_key: config.effective_identity_key(),
            default_max_tokens: config.max_tokens,
        };

        let mut client = Self {
            config,
            session,
            http,
            transport,
            composer,
        };

        debug!(
            base_url = %client.config.trimmed_base_url(),
            mode = client.session.mode(),
            auto_login = client.config.auto_login,
            "client created"
        );

        if client.config.auto_login {
            client.login().await?;
        }
        Ok(client)
    }

    /// Log in and store the token. Calling it again replaces the token.
    pub async fn login(&mut self) -> Result<BearerToken, ClientError> {
        self.session.login().await
    }

    /// The bearer value attached to calls, if any.
    pub fn current_token(&self) -> Option<&BearerToken> {
        self.session.current_token()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        self.config.endpoint_url(endpoint)
    }
}
