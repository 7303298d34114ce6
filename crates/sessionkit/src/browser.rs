//! Browser-context factory with singleton lifecycle.

use std::sync::Arc;

use sessionkit_cookies::{BrowserCookies, CookieSessionStorage, DomDocumentCookies};
use sessionkit_core::Client;

use crate::{
    config::{BrowserClientConfig, ClientConfig, ConfigurationError},
    singleton::{SharedClientSlot, SHARED_CLIENT},
};

/// Creates a browser-context client persisting its session through the
/// live document cookie.
///
/// With `is_singleton` (the default) and a window present, one client is
/// shared for the page lifetime. During a window-less pass (server-side
/// rendering reusing browser-context code) a fresh client is returned and
/// the shared slot is left untouched.
pub fn create_browser_client(config: BrowserClientConfig) -> Result<Client, ConfigurationError> {
    create_browser_client_in(&SHARED_CLIENT, window_present(), config)
}

fn create_browser_client_in(
    slot: &SharedClientSlot,
    window_present: bool,
    config: BrowserClientConfig,
) -> Result<Client, ConfigurationError> {
    let is_singleton = config.is_singleton;
    // Credentials are validated before any bridge is constructed or the
    // slot is consulted.
    let (settings, cookie) = ClientConfig::from(config).into_settings()?;

    let build = move || {
        let storage = CookieSessionStorage::new(BrowserCookies::new(DomDocumentCookies), cookie);
        Client::new(settings, Arc::new(storage))
    };

    if !is_singleton || !window_present {
        return Ok(build());
    }
    if let Some(client) = slot.get() {
        return Ok(client);
    }
    let client = build();
    slot.store(client.clone());
    Ok(client)
}

fn window_present() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().is_some()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BrowserClientConfig {
        BrowserClientConfig {
            url: Some("https://sessions.example.com".to_string()),
            key: Some("publishable-key".to_string()),
            ..BrowserClientConfig::default()
        }
    }

    fn same_instance(a: &Client, b: &Client) -> bool {
        Arc::ptr_eq(&a.internal, &b.internal)
    }

    #[test]
    fn test_window_less_pass_bypasses_the_slot() {
        let slot = SharedClientSlot::new();

        let first = create_browser_client_in(&slot, false, config()).expect("client builds");
        let second = create_browser_client_in(&slot, false, config()).expect("client builds");

        assert!(!same_instance(&first, &second));
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_window_present_shares_one_instance() {
        let slot = SharedClientSlot::new();

        let first = create_browser_client_in(&slot, true, config()).expect("client builds");
        let second = create_browser_client_in(&slot, true, config()).expect("client builds");

        assert!(same_instance(&first, &second));
        assert!(slot.get().is_some());
    }

    #[test]
    fn test_non_singleton_ignores_a_populated_slot() {
        let slot = SharedClientSlot::new();
        let shared = create_browser_client_in(&slot, true, config()).expect("client builds");

        let mut non_singleton = config();
        non_singleton.is_singleton = false;
        let fresh = create_browser_client_in(&slot, true, non_singleton).expect("client builds");

        assert!(!same_instance(&shared, &fresh));
        let slotted = slot.get().expect("slot keeps the shared client");
        assert!(same_instance(&shared, &slotted));
    }

    #[test]
    fn test_missing_credentials_fail_before_the_slot_is_touched() {
        let slot = SharedClientSlot::new();
        let result = create_browser_client_in(&slot, true, BrowserClientConfig::default());

        assert_eq!(result.err(), Some(ConfigurationError::MissingUrl));
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_public_factory_off_browser_returns_fresh_instances() {
        // Off-wasm there is never a window, so the global slot stays empty.
        let first = create_browser_client(config()).expect("client builds");
        let second = create_browser_client(config()).expect("client builds");

        assert!(!same_instance(&first, &second));
    }
}
