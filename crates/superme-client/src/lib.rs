//! Client for the SuperMe AI chat API.
//!
//! Provides:
//! - API-key or username/password authentication with a per-client token
//! - Conversation-aware `ask` calls over the OpenAI-compatible endpoint
//! - An OpenAI-compatible completion passthrough
//! - Raw authenticated requests, with helpers for MCP tool envelopes
//!
//! ```rust,no_run
//! use superme_client::{AskOptions, SuperMeClient};
//! use superme_config::ClientConfig;
//!
//! # async fn run() -> Result<(), superme_client::ClientError> {
//! let client = SuperMeClient::new(ClientConfig::from_api_key("sk-...")).await?;
//! let answer = client
//!     .ask("What is product-market fit?", "ludo", &AskOptions::default())
//!     .await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
mod compose;
pub mod error;
pub mod mcp;
pub mod options;
pub mod transport;

pub use auth::{BearerToken, SessionManager};
pub use client::SuperMeClient;
pub use error::ClientError;
pub use mcp::{AskToolPayload, McpRequest, McpToolResult};
pub use options::{AskOptions, ChatOptions, RawRequestOptions, ResponseFormat};
pub use transport::{ChatCompletion, ChatCompletionRequest, ChatTransport, HttpTransport};

pub use reqwest::Method;
pub use superme_common::{ConversationId, Message, Role, TargetIdentity};
