//! The session data type issued by the session service.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A session as issued by the session service.
///
/// The storage layer treats the serialized form as an opaque string; only
/// the client interprets its structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token authorizing requests on behalf of the user.
    pub access_token: String,
    /// Token used to obtain a fresh access token.
    pub refresh_token: String,
    /// Token scheme, typically `bearer`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Unix timestamp at which the access token expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    /// Creates a session with the `bearer` token type and no expiry.
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            token_type: default_token_type(),
            expires_at: None,
        }
    }

    /// Returns true if the session is past its expiry timestamp.
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Utc::now().timestamp() > expires_at)
    }
}
