//! Chat transcript types.

use serde::{Deserialize, Serialize};

/// One entry of a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_in_openai_shape() {
        let msg = Message::user("What is PMF?");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role": "user", "content": "What is PMF?"})
        );
    }

    #[test]
    fn role_names_are_lowercase() {
        let roles = [Role::User, Role::Assistant, Role::System, Role::Tool];
        let names: Vec<String> = roles
            .iter()
            .map(|r| serde_json::to_value(r).unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["user", "assistant", "system", "tool"]);
    }

    #[test]
    fn message_deserializes_from_openai_shape() {
        let msg: Message =
            serde_json::from_str(r#"{"role":"assistant","content":"Product-market fit..."}"#)
                .unwrap();
        assert_eq!(msg, Message::assistant("Product-market fit..."));
    }
}
