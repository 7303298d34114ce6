use std::collections::HashMap;

/// Basic client behavior settings. These settings specify the target
/// service and the headers sent with every request. They are uneditable
/// once the client is initialized.
#[derive(Clone, Debug)]
pub struct ClientSettings {
    /// Base URL of the session service the client talks to.
    pub url: String,
    /// Publishable API key sent with every request.
    pub key: String,
    /// Additional headers applied to every request. Entries here override
    /// the built-in defaults on key collision.
    pub headers: HashMap<String, String>,
    /// Storage key under which the client persists its session.
    pub storage_key: String,
}
