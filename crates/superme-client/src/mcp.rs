//! MCP tool envelopes for the `/mcp` endpoint.
//!
//! These are caller-side conveniences. The client sends an `McpRequest`
//! through `raw_request` without checking it, and decoding a reply is up
//! to whoever asked.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use superme_common::{ConversationId, TargetIdentity};
use superme_config::IdentityKey;

use crate::ClientError;

/// `{method, params}` envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct McpRequest {
    pub method: String,
    pub params: Value,
}

impl McpRequest {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    pub fn initialize() -> Self {
        Self::new("initialize", json!({}))
    }

    pub fn tools_list() -> Self {
        Self::new("tools/list", json!({}))
    }

    pub fn tools_call(name: &str, arguments: Value) -> Self {
        Self::new(
            "tools/call",
            json!({ "name": name, "arguments": arguments }),
        )
    }

    /// The `ask` tool: a question for `target`'s personalized model.
    pub fn ask_tool(identity_key: IdentityKey, target: &TargetIdentity, question: &str) -> Self {
        let mut arguments = serde_json::Map::new();
        arguments.insert(identity_key.as_str().into(), json!(target.as_str()));
        arguments.insert("question".into(), json!(question));
        Self::tools_call("ask", Value::Object(arguments))
    }

    pub fn list_conversations(limit: u32) -> Self {
        Self::tools_call("list_conversations", json!({ "limit": limit }))
    }

    pub fn get_conversation(id: &ConversationId) -> Self {
        Self::tools_call("get_conversation", json!({ "conversation_id": id.as_str() }))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct McpContent {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Reply to a `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct McpToolResult {
    #[serde(default)]
    pub content: Vec<McpContent>,
    #[serde(rename = "isError", default)]
    pub is_error: bool,
}

impl McpToolResult {
    /// Decode the JSON document carried in `content[0].text`.
    pub fn text_payload<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        let text = self
            .content
            .first()
            .and_then(|c| c.text.as_deref())
            .ok_or_else(|| ClientError::Parse("tool result has no text content".into()))?;
        serde_json::from_str(text)
            .map_err(|e| ClientError::Parse(format!("tool result text is not the expected JSON: {e}")))
    }
}

/// Payload of the `ask` tool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AskToolPayload {
    pub question: String,
    pub response: String,
    #[serde(default)]
    pub conversation_id: Option<ConversationId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_tool_envelope() {
        let request = McpRequest::ask_tool(
            IdentityKey::Username,
            &TargetIdentity::from("ludo"),
            "What is product-market fit?",
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "method": "tools/call",
                "params": {
                    "name": "ask",
                    "arguments": {
                        "username": "ludo",
                        "question": "What is product-market fit?"
                    }
                }
            })
        );
    }

    #[test]
    fn simple_envelopes() {
        assert_eq!(
            serde_json::to_value(McpRequest::initialize()).unwrap(),
            json!({"method": "initialize", "params": {}})
        );
        assert_eq!(McpRequest::tools_list().method, "tools/list");
        assert_eq!(
            McpRequest::list_conversations(5).params,
            json!({"name": "list_conversations", "arguments": {"limit": 5}})
        );
        assert_eq!(
            McpRequest::get_conversation(&ConversationId::new("c1")).params["arguments"],
            json!({"conversation_id": "c1"})
        );
    }

    #[test]
    fn ask_payload_decodes_from_text_content() {
        let result: McpToolResult = serde_json::from_value(json!({
            "content": [{
                "type": "text",
                "text": "{\"question\":\"q\",\"response\":\"a\",\"conversation_id\":\"c7\"}"
            }]
        }))
        .unwrap();
        let payload: AskToolPayload = result.text_payload().unwrap();
        assert_eq!(payload.response, "a");
        assert_eq!(payload.conversation_id, Some(ConversationId::new("c7")));
        assert!(!result.is_error);
    }

    #[test]
    fn missing_text_is_parse_error() {
        let result: McpToolResult = serde_json::from_value(json!({"content": []})).unwrap();
        assert!(matches!(
            result.text_payload::<Value>(),
            Err(ClientError::Parse(_))
        ));
    }

    #[test]
    fn non_json_text_is_parse_error() {
        let result: McpToolResult = serde_json::from_value(json!({
            "content": [{"type": "text", "text": "plain words"}]
        }))
        .unwrap();
        assert!(result.text_payload::<AskToolPayload>().is_err());
    }
}
