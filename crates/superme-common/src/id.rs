use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-issued identifier correlating several exchanges into one thread.
///
/// The client never mints these; it only hands back what a previous
/// response returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConversationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ConversationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The user or profile whose personalized model answers a question.
///
/// Either a numeric user id or a username, depending on the deployment.
/// Both travel as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetIdentity(String);

impl TargetIdentity {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetIdentity {
    fn default() -> Self {
        Self("1".to_string())
    }
}

impl fmt::Display for TargetIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TargetIdentity {
    fn from(identity: &str) -> Self {
        Self(identity.to_string())
    }
}

impl From<String> for TargetIdentity {
    fn from(identity: String) -> Self {
        Self(identity)
    }
}

impl From<u64> for TargetIdentity {
    fn from(user_id: u64) -> Self {
        Self(user_id.to_string())
    }
}
