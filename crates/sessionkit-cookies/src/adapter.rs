//! Mapping the session storage contract onto cookie transports.

use sessionkit_core::SessionStorage;

use crate::{
    attributes::{CookieAttributes, CookieConfig, CookieOverrides},
    chunks::{combine_chunks, create_chunks},
};

/// Capability a cookie storage adapter needs from an execution context.
///
/// One implementation exists per context (browser document, render jar,
/// route header pair). Deletion is not part of the contract; the adapter
/// expires cookies through the write hook, since not every environment
/// exposes a removal primitive.
pub trait CookieTransport: Send + Sync {
    /// Returns the current value of the cookie `name`, if any.
    fn get_cookie(&self, name: &str) -> Option<String>;

    /// Writes `name=value` with exactly the attributes given.
    fn set_cookie(&self, name: &str, value: &str, attributes: &CookieAttributes);
}

/// Session storage backend persisting a single value through a cookie
/// transport.
///
/// The adapter is single-slot: every operation uses the configured cookie
/// name, and the storage key passed by the session client is ignored.
/// Values too large for one cookie are split across chunk cookies.
pub struct CookieSessionStorage<T> {
    transport: T,
    config: CookieConfig,
}

impl<T: CookieTransport> CookieSessionStorage<T> {
    /// Creates an adapter writing through `transport` with `config`'s
    /// cookie name and attributes.
    pub fn new(transport: T, config: CookieConfig) -> Self {
        Self { transport, config }
    }

    /// The configured cookie name.
    pub fn cookie_name(&self) -> &str {
        &self.config.name
    }

    fn expire(&self, name: &str) {
        let attributes = self
            .config
            .attributes
            .merge(&CookieOverrides::expire_now());
        self.transport.set_cookie(name, "", &attributes);
    }

    // Expires chunk cookies from index `from` until the first miss.
    fn expire_chunks_from(&self, from: usize) {
        for i in from.. {
            let name = format!("{}.{}", self.config.name, i);
            let staged = self
                .transport
                .get_cookie(&name)
                .filter(|value| !value.is_empty());
            if staged.is_none() {
                break;
            }
            self.expire(&name);
        }
    }
}

impl<T: CookieTransport> SessionStorage for CookieSessionStorage<T> {
    fn get_item(&self, _key: &str) -> Option<String> {
        combine_chunks(&self.config.name, |name| self.transport.get_cookie(name))
    }

    fn set_item(&self, _key: &str, value: &str) {
        let chunks = create_chunks(&self.config.name, value, None);
        let chunked = chunks.first().is_some_and(|chunk| chunk.name != self.config.name);

        for chunk in &chunks {
            self.transport
                .set_cookie(&chunk.name, &chunk.value, &self.config.attributes);
        }

        if chunked {
            // The unchunked cookie would otherwise shadow the chunk set on read.
            self.expire(&self.config.name);
            self.expire_chunks_from(chunks.len());
        } else {
            self.expire_chunks_from(0);
        }
    }

    fn remove_item(&self, _key: &str) {
        self.expire(&self.config.name);
        self.expire_chunks_from(0);
    }
}
