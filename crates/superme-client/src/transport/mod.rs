//! The chat-completion capability the client is built on.
//!
//! `ChatTransport` exposes a single operation, creating one completion.
//! The reqwest-backed `HttpTransport` is the default; anything that speaks
//! the same request/response shape can stand in for it.

mod dto;
mod http;

use async_trait::async_trait;

use crate::auth::BearerToken;
use crate::ClientError;

pub use dto::{ChatChoice, ChatCompletion, ChatCompletionRequest, ChoiceMessage, Usage};
pub use http::{build_http_client, HttpTransport};

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Create one chat completion, authenticated with `token`.
    async fn create_chat_completion(
        &self,
        token: &BearerToken,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, ClientError>;
}
