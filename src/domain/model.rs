use crate::utils::error::{PushError, Result};
use crate::utils::logger::mask_token;
use serde::Serialize;
use std::fmt;

/// Payload for the admin `set_token` call.
///
/// Serializes to `{"access_token": "<token>"}`. The token is kept verbatim:
/// only the empty string is rejected, surrounding whitespace is preserved.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct TokenRequest {
    access_token: String,
}

impl TokenRequest {
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        let access_token = access_token.into();
        if access_token.is_empty() {
            return Err(PushError::missing_token());
        }
        Ok(Self { access_token })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn masked(&self) -> String {
        mask_token(&self.access_token)
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({ "access_token": self.access_token }).to_string()
    }
}

impl fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("access_token", &self.masked())
            .finish()
    }
}

/// Raw answer from the admin endpoint. Neither status nor body is interpreted;
/// the body keeps the exact bytes the server sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl PushResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Lossy text view of the body, for messages and logs.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
