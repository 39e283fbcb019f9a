//! Data transfer objects for the OpenAI-compatible completion endpoint.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use superme_common::{ConversationId, Message};

use crate::options::ChatOptions;

/// Body of a chat completion call.
///
/// Metadata such as the target identity and conversation id lives in
/// `options.extra_body` and is sent at the top level of the body, the way
/// OpenAI clients merge `extra_body`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
    pub options: ChatOptions,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: None,
            options: ChatOptions::default(),
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }

    /// Out-of-band metadata sent alongside the transcript.
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.options.extra_body
    }

    /// The JSON object sent on the wire.
    ///
    /// Named fields go in first. `extra_body` entries are merged last and
    /// replace any named field with the same key, so every key appears once.
    pub fn to_body(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut body = Map::new();
        body.insert("model".into(), Value::String(self.model.clone()));
        body.insert("messages".into(), serde_json::to_value(&self.messages)?);
        if let Some(max_tokens) = self.max_tokens {
            body.insert("max_tokens".into(), max_tokens.into());
        }
        if let Value::Object(sampling) = serde_json::to_value(&self.options)? {
            body.extend(sampling);
        }
        body.extend(self.options.extra_body.clone());
        Ok(body)
    }
}

impl Serialize for ChatCompletionRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_body()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: Option<String>,
    /// Null when the model answered with something other than text.
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

/// Response of a chat completion call.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
    #[serde(default)]
    conversation_id: Option<Value>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl ChatCompletion {
    /// Text of the first choice. A null content reads as empty text.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_deref().unwrap_or(""))
    }

    /// Conversation id issued by the server, read from the top level or
    /// from `metadata`. Strings and numbers are accepted; empty strings and
    /// nulls count as absent.
    pub fn conversation_id(&self) -> Option<ConversationId> {
        let in_metadata = self
            .metadata
            .as_ref()
            .and_then(|m| m.get("conversation_id"));

        self.conversation_id
            .as_ref()
            .and_then(id_text)
            .or_else(|| in_metadata.and_then(id_text))
            .map(ConversationId::from)
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_shape() {
        let mut options = ChatOptions::default();
        options.extra_body.insert("user".into(), json!("1"));
        let request = ChatCompletionRequest::new("gpt-4", vec![Message::user("What is PMF?")])
            .with_max_tokens(50)
            .with_options(options);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4",
                "messages": [{"role": "user", "content": "What is PMF?"}],
                "max_tokens": 50,
                "user": "1"
            })
        );
        assert_eq!(request.metadata().get("user"), Some(&json!("1")));
    }

    #[test]
    fn minimal_response_parses() {
        let response: ChatCompletion = serde_json::from_value(json!({
            "choices": [{"message": {"content": "Product-market fit is..."}}]
        }))
        .unwrap();
        assert_eq!(response.first_content(), Some("Product-market fit is..."));
        assert_eq!(response.conversation_id(), None);
        assert!(response.usage.is_none());
    }

    #[test]
    fn conversation_id_at_top_level() {
        let response: ChatCompletion = serde_json::from_value(json!({
            "choices": [],
            "conversation_id": "conv-top",
            "metadata": {"conversation_id": "conv-meta"}
        }))
        .unwrap();
        assert_eq!(response.conversation_id(), Some(ConversationId::new("conv-top")));
    }

    #[test]
    fn conversation_id_in_metadata() {
        let response: ChatCompletion = serde_json::from_value(json!({
            "choices": [],
            "conversation_id": "",
            "metadata": {"conversation_id": "conv-meta"}
        }))
        .unwrap();
        assert_eq!(response.conversation_id(), Some(ConversationId::new("conv-meta")));
    }

    #[test]
    fn null_content_reads_empty() {
        let response: ChatCompletion = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert_eq!(response.first_content(), Some(""));
    }

    #[test]
    fn no_choices_has_no_content() {
        let response: ChatCompletion = serde_json::from_value(json!({"choices": []})).unwrap();
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn usage_parses() {
        let response: ChatCompletion = serde_json::from_value(json!({
            "choices": [],
            "usage": {"prompt_tokens": 12, "completion_tokens": 30, "total_tokens": 42}
        }))
        .unwrap();
        assert_eq!(response.usage.unwrap().total_tokens, 42);
    }

    #[test]
    fn numeric_conversation_id_at_top_level() {
        let response: ChatCompletion = serde_json::from_value(json!({
            "choices": [{"message": {"content": "answer"}}],
            "conversation_id": 42
        }))
        .unwrap();
        assert_eq!(response.first_content(), Some("answer"));
        assert_eq!(response.conversation_id(), Some(ConversationId::new("42")));
    }

    #[test]
    fn numeric_conversation_id_in_metadata() {
        let response: ChatCompletion = serde_json::from_value(json!({
            "choices": [],
            "metadata": {"conversation_id": 42}
        }))
        .unwrap();
        assert_eq!(response.conversation_id(), Some(ConversationId::new("42")));
    }

    #[test]
    fn null_or_odd_conversation_id_is_absent() {
        let response: ChatCompletion = serde_json::from_value(json!({
            "choices": [],
            "conversation_id": null,
            "metadata": {"conversation_id": {"nested": true}}
        }))
        .unwrap();
        assert_eq!(response.conversation_id(), None);
    }

    #[test]
    fn extra_body_replaces_named_fields() {
        let options = ChatOptions::default()
            .with_temperature(0.5)
            .with_extra("model", json!("gpt-4o"))
            .with_extra("max_tokens", json!(99))
            .with_extra("temperature", json!(0.9));
        let request = ChatCompletionRequest::new("gpt-4", vec![Message::user("hi")])
            .with_max_tokens(50)
            .with_options(options);

        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body.matches("\"model\"").count(), 1);
        assert_eq!(body.matches("\"max_tokens\"").count(), 1);
        assert_eq!(body.matches("\"temperature\"").count(), 1);

        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["model"], json!("gpt-4o"));
        assert_eq!(value["max_tokens"], json!(99));
        assert_eq!(value["temperature"], json!(0.9));
    }
}
