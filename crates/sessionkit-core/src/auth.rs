//! Session token lifecycle backed by the client's storage.

use crate::{Client, Session, SessionEncodeError};

/// Sub-client for reading and writing the persisted session.
///
/// Every operation goes through the client's [`SessionStorage`] backend;
/// with a cookie-backed storage this is what relays the session token into
/// and out of the HTTP request/response cycle.
///
/// [`SessionStorage`]: crate::SessionStorage
pub struct AuthClient {
    client: Client,
}

impl Client {
    /// Access the session lifecycle operations.
    pub fn auth(&self) -> AuthClient {
        AuthClient {
            client: self.clone(),
        }
    }
}

impl AuthClient {
    /// Returns the session currently persisted in storage, if any.
    ///
    /// An absent or unreadable value reads as "no session".
    pub fn current_session(&self) -> Option<Session> {
        let raw = self.client.storage().get_item(self.client.storage_key())?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(error) => {
                tracing::warn!("Discarding unparseable persisted session: {error}");
                None
            }
        }
    }

    /// Persists `session`, replacing any previous one.
    pub fn save_session(&self, session: &Session) -> Result<(), SessionEncodeError> {
        let raw = serde_json::to_string(session)?;
        self.client
            .storage()
            .set_item(self.client.storage_key(), &raw);
        Ok(())
    }

    /// Removes the persisted session.
    pub fn sign_out(&self) {
        self.client.storage().remove_item(self.client.storage_key());
    }

    /// Returns the access token of the current session, unless expired.
    pub fn access_token(&self) -> Option<String> {
        let session = self.current_session()?;
        if session.is_expired() {
            return None;
        }
        Some(session.access_token)
    }
}
