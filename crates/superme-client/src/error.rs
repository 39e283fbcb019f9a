use superme_common::ConfigError;

/// Every failure the client surfaces. Nothing is retried; errors reach the
/// caller as soon as they happen.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The login exchange was rejected or could not complete.
    #[error("authentication failed{}: {message}", status_suffix(.status))]
    Authentication {
        status: Option<u16>,
        message: String,
    },

    /// An authenticated call was attempted before any token was obtained.
    #[error("not authenticated: call login() first or enable auto_login")]
    NotAuthenticated,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the completion or MCP endpoint.
    #[error("upstream error (HTTP {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl ClientError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } => *status,
            Self::Upstream { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
