//! Token and login wire types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque bearer credential attached to every authenticated call.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Accepts `{"access_token": ...}` or `{"token": ...}`.
#[derive(Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(alias = "token")]
    pub access_token: String,
}
