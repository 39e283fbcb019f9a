use serde::{Deserialize, Serialize};

/// Endpoint paths, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Password login exchange.
    pub login: String,
    /// OpenAI-compatible chat completions.
    pub chat_completions: String,
    /// MCP tool envelope endpoint.
    pub mcp: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            login: "/auth/login".into(),
            chat_completions: "/mcp/chat/completions".into(),
            mcp: "/mcp".into(),
        }
    }
}
