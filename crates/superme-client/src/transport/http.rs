//! reqwest-backed `ChatTransport`.

use std::time::Duration;

use async_trait::async_trait;
use superme_config::ClientConfig;
use tracing::{debug, warn};

use crate::auth::BearerToken;
use crate::ClientError;

use super::dto::{ChatCompletion, ChatCompletionRequest};
use super::ChatTransport;

/// Build the shared HTTP client with the configured timeouts.
pub fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client, ClientError> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.http.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = config.http.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Posts completion requests to `{base_url}{endpoints.chat_completions}`.
pub struct HttpTransport {
    http: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig, http: reqwest::Client) -> Self {
        Self::new(http, config.endpoint_url(&config.endpoints.chat_completions))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn create_chat_completion(
        &self,
        token: &BearerToken,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, ClientError> {
        debug!(
            model = %request.model,
            message_count = request.messages.len(),
            url = %self.url,
            "chat completion request"
        );

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(token.as_str())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%status, url = %self.url, "chat completion failed");
            return Err(ClientError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ClientError::Parse(format!("malformed completion response: {e}")))
    }
}
