//! Conversation-aware request shaping and reply unwrapping.
//!
//! The client keeps no conversation state. Continuity comes from the
//! caller handing back the id a previous reply carried.

use serde_json::Value;
use superme_common::{ConversationId, Message, TargetIdentity};
use superme_config::IdentityKey;

use crate::options::AskOptions;
use crate::transport::{ChatCompletion, ChatCompletionRequest};
use crate::ClientError;

const CONVERSATION_ID_KEY: &str = "conversation_id";

/// Fixed per-client inputs to request composition.
#[derive(Debug, Clone)]
pub(crate) struct Composer {
    pub model: String,
    pub identity_key: IdentityKey,
    pub default_max_tokens: u32,
}

impl Composer {
    /// Shape a completion request for `messages` on behalf of `target`.
    ///
    /// The identity and conversation id are written over any same-named
    /// keys in `options.chat.extra_body`.
    pub fn request(
        &self,
        messages: Vec<Message>,
        target: &TargetIdentity,
        options: &AskOptions,
    ) -> ChatCompletionRequest {
        let mut chat = options.chat.clone();
        chat.extra_body.insert(
            self.identity_key.as_str().to_string(),
            Value::String(target.as_str().to_string()),
        );
        if let Some(id) = &options.conversation_id {
            chat.extra_body.insert(
                CONVERSATION_ID_KEY.to_string(),
                Value::String(id.as_str().to_string()),
            );
        }

        ChatCompletionRequest::new(self.model.clone(), messages)
            .with_max_tokens(options.max_tokens.unwrap_or(self.default_max_tokens))
            .with_options(chat)
    }
}

/// Answer text of the first choice.
pub(crate) fn answer_text(response: &ChatCompletion) -> Result<String, ClientError> {
    response
        .first_content()
        .map(str::to_string)
        .ok_or_else(|| ClientError::Parse("no choices in completion response".into()))
}

/// The id the server issued, else the one the caller supplied.
pub(crate) fn next_conversation_id(
    response: &ChatCompletion,
    supplied: Option<&ConversationId>,
) -> Option<ConversationId> {
    response.conversation_id().or_else(|| supplied.cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ChatOptions;
    use serde_json::json;

    fn composer(identity_key: IdentityKey) -> Composer {
        Composer {
            model: "gpt-4".into(),
            identity_key,
            default_max_tokens: 1000,
        }
    }

    fn completion(value: Value) -> ChatCompletion {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn first_turn_carries_identity_only() {
        let request = composer(IdentityKey::User).request(
            vec![Message::user("What is PMF?")],
            &TargetIdentity::from("1"),
            &AskOptions::default().with_max_tokens(50),
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4",
                "messages": [{"role": "user", "content": "What is PMF?"}],
                "max_tokens": 50,
                "user": "1"
            })
        );
    }

    #[test]
    fn continuation_carries_conversation_id() {
        let request = composer(IdentityKey::Username).request(
            vec![Message::user("Give me 3 examples")],
            &TargetIdentity::from("ludo"),
            &AskOptions::default().with_conversation("conv-9"),
        );
        let metadata = request.metadata();
        assert_eq!(metadata.get("username"), Some(&json!("ludo")));
        assert_eq!(metadata.get("conversation_id"), Some(&json!("conv-9")));
        assert!(metadata.get("user").is_none());
    }

    #[test]
    fn default_max_tokens_applies() {
        let request = composer(IdentityKey::User).request(
            vec![Message::user("hi")],
            &TargetIdentity::default(),
            &AskOptions::default(),
        );
        assert_eq!(request.max_tokens, Some(1000));
    }

    #[test]
    fn identity_overrides_extra_body() {
        let options = AskOptions::default()
            .with_chat_options(ChatOptions::default().with_extra("user", json!("spoofed")));
        let request =
            composer(IdentityKey::User).request(vec![], &TargetIdentity::from("1"), &options);
        assert_eq!(request.metadata().get("user"), Some(&json!("1")));
    }

    #[test]
    fn server_id_wins_over_supplied() {
        let response = completion(json!({"choices": [], "conversation_id": "new"}));
        let supplied = ConversationId::new("old");
        assert_eq!(
            next_conversation_id(&response, Some(&supplied)),
            Some(ConversationId::new("new"))
        );
    }

    #[test]
    fn supplied_id_is_kept_when_response_has_none() {
        let response = completion(json!({"choices": []}));
        let supplied = ConversationId::new("old");
        assert_eq!(next_conversation_id(&response, Some(&supplied)), Some(supplied));
    }

    #[test]
    fn no_id_anywhere_is_absent() {
        let response = completion(json!({"choices": []}));
        assert_eq!(next_conversation_id(&response, None), None);
    }

    #[test]
    fn empty_choices_is_parse_error() {
        let response = completion(json!({"choices": []}));
        assert!(matches!(answer_text(&response), Err(ClientError::Parse(_))));
    }
}
