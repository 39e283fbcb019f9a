use serde::{Deserialize, Serialize};

/// Transport-level settings handed to the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout. Unset means the transport's own default.
    pub request_timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: Some(10),
            request_timeout_secs: None,
        }
    }
}
