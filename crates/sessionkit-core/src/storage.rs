//! Key-value persistence capability for the session client.

use std::{collections::HashMap, sync::RwLock};

/// Abstraction for the persistence backend a [`Client`](crate::Client)
/// stores its session through.
///
/// Enables multiple implementations (cookies, in-memory, platform storage)
/// without coupling the client to a transport. All operations are
/// synchronous: the backend performs in-memory string work only, and a
/// failing backend reads as "no value" rather than surfacing an error.
pub trait SessionStorage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set_item(&self, key: &str, value: &str);

    /// Removes the value stored under `key`. Idempotent.
    fn remove_item(&self, key: &str);
}

/// In-memory storage backend using a HashMap with RwLock for thread-safe
/// access.
///
/// Suitable for tests and for execution contexts without a cookie
/// transport.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    items: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStorage {
    /// Creates a new empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .read()
            .expect("RwLock should not be poisoned")
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .write()
            .expect("RwLock should not be poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items
            .write()
            .expect("RwLock should not be poisoned")
            .remove(key);
    }
}
