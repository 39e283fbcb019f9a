//! Authenticated calls: ask, completions passthrough, raw and MCP requests.

use reqwest::Method;
use superme_common::{ConversationId, Message, TargetIdentity};
use tracing::debug;

use crate::compose::{answer_text, next_conversation_id};
use crate::mcp::McpRequest;
use crate::options::{AskOptions, RawRequestOptions};
use crate::transport::{ChatCompletion, ChatCompletionRequest};
use crate::ClientError;

use super::instance::SuperMeClient;

impl SuperMeClient {
    /// Ask `target`'s model a single question and return the answer text.
    ///
    /// Same request as `ask_with_history` with a one-message transcript;
    /// the returned conversation id is dropped.
    pub async fn ask(
        &self,
        question: impl Into<String>,
        target: impl Into<TargetIdentity>,
        options: &AskOptions,
    ) -> Result<String, ClientError> {
        let transcript = [Message::user(question)];
        let (answer, _) = self.ask_with_history(&transcript, target, options).await?;
        Ok(answer)
    }

    /// Send a full transcript and return the answer with the conversation
    /// id to pass on the next turn.
    ///
    /// The id is the one the server issued, else `options.conversation_id`,
    /// else `None`.
    pub async fn ask_with_history(
        &self,
        messages: &[Message],
        target: impl Into<TargetIdentity>,
        options: &AskOptions,
    ) -> Result<(String, Option<ConversationId>), ClientError> {
        let token = self.session.require_token()?;
        let target = target.into();
        let request = self.composer.request(messages.to_vec(), &target, options);

        debug!(
            %target,
            message_count = messages.len(),
            continuing = options.conversation_id.is_some(),
            "ask"
        );

        let response = self
            .transport
            .create_chat_completion(token, &request)
            .await?;

        let answer = answer_text(&response)?;
        let conversation_id = next_conversation_id(&response, options.conversation_id.as_ref());
        Ok((answer, conversation_id))
    }

    /// OpenAI-compatible passthrough: send a caller-built request as-is.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, ClientError> {
        let token = self.session.require_token()?;
        self.transport.create_chat_completion(token, request).await
    }

    /// Authenticated request to `{base_url}{endpoint}` with no shaping.
    ///
    /// The response comes back untouched whatever its status; only
    /// network failures become errors.
    pub async fn raw_request(
        &self,
        endpoint: &str,
        method: Method,
        options: RawRequestOptions,
    ) -> Result<reqwest::Response, ClientError> {
        let token = self.session.require_token()?;
        let url = self.url(endpoint);

        debug!(%method, %url, "raw request");

        let mut builder = self.http.request(method, &url);
        for (name, value) in &options.headers {
            if !name.eq_ignore_ascii_case("authorization") {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        builder = builder.bearer_auth(token.as_str());

        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(json) = &options.json {
            builder = builder.json(json);
        } else if let Some(body) = options.body {
            builder = builder.body(body);
        }

        Ok(builder.send().await?)
    }

    /// POST an MCP envelope to the MCP endpoint via `raw_request`.
    pub async fn mcp(&self, request: &McpRequest) -> Result<reqwest::Response, ClientError> {
        let body = serde_json::to_value(request)
            .map_err(|e| ClientError::Parse(format!("failed to encode MCP request: {e}")))?;
        self.raw_request(
            &self.config.endpoints.mcp,
            Method::POST,
            RawRequestOptions::json(body),
        )
        .await
    }
}
