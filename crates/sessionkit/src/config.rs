//! Factory configuration and credential resolution.

use std::collections::HashMap;

use sessionkit_cookies::CookieConfig;
use sessionkit_core::ClientSettings;
use thiserror::Error;

/// Environment variable consulted when no explicit service URL is given.
pub const URL_ENV_VAR: &str = "SESSIONKIT_URL";
/// Environment variable consulted when no explicit key is given.
pub const KEY_ENV_VAR: &str = "SESSIONKIT_KEY";

/// Identifying header merged into the client's defaults unless the caller
/// sets its own value for it.
const CLIENT_INFO_HEADER: &str = "X-Client-Info";

/// A factory was called without a resolvable URL or key.
///
/// Not retried; the caller must fix its configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No service URL was supplied and [`URL_ENV_VAR`] is unset.
    #[error("either the {URL_ENV_VAR} environment variable or an explicit `url` is required")]
    MissingUrl,
    /// No key was supplied and [`KEY_ENV_VAR`] is unset.
    #[error("either the {KEY_ENV_VAR} environment variable or an explicit `key` is required")]
    MissingKey,
}

/// Options applied to the constructed session client.
#[derive(Clone, Debug, Default)]
pub struct ClientOptions {
    /// Extra headers sent with every request; these override the built-in
    /// defaults on key collision.
    pub headers: HashMap<String, String>,
}

/// Configuration accepted by the server-side factories.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Service URL; falls back to [`URL_ENV_VAR`].
    pub url: Option<String>,
    /// Publishable key; falls back to [`KEY_ENV_VAR`].
    pub key: Option<String>,
    /// Client behavior options.
    pub options: ClientOptions,
    /// Session cookie name and attributes.
    pub cookie: CookieConfig,
}

/// Configuration accepted by the browser factory.
#[derive(Clone, Debug)]
pub struct BrowserClientConfig {
    /// Service URL; falls back to [`URL_ENV_VAR`].
    pub url: Option<String>,
    /// Publishable key; falls back to [`KEY_ENV_VAR`].
    pub key: Option<String>,
    /// Client behavior options.
    pub options: ClientOptions,
    /// Session cookie name and attributes.
    pub cookie: CookieConfig,
    /// Share one client per page lifetime. Defaults to `true`.
    pub is_singleton: bool,
}

impl Default for BrowserClientConfig {
    fn default() -> Self {
        Self {
            url: None,
            key: None,
            options: ClientOptions::default(),
            cookie: CookieConfig::default(),
            is_singleton: true,
        }
    }
}

impl From<BrowserClientConfig> for ClientConfig {
    fn from(config: BrowserClientConfig) -> Self {
        Self {
            url: config.url,
            key: config.key,
            options: config.options,
            cookie: config.cookie,
        }
    }
}

impl ClientConfig {
    /// Resolves the session client settings, applying environment defaults
    /// and the identifying header, and returns them with the cookie
    /// configuration.
    pub(crate) fn into_settings(self) -> Result<(ClientSettings, CookieConfig), ConfigurationError> {
        let url = resolve(self.url, URL_ENV_VAR).ok_or(ConfigurationError::MissingUrl)?;
        let key = resolve(self.key, KEY_ENV_VAR).ok_or(ConfigurationError::MissingKey)?;

        // Defaults first, then the caller's headers on top.
        let mut headers = HashMap::from([(
            CLIENT_INFO_HEADER.to_string(),
            format!("sessionkit-rs/{}", env!("CARGO_PKG_VERSION")),
        )]);
        headers.extend(self.options.headers);

        let settings = ClientSettings {
            url,
            key,
            headers,
            storage_key: self.cookie.name.clone(),
        };
        Ok((settings, self.cookie))
    }
}

fn resolve(explicit: Option<String>, var: &str) -> Option<String> {
    explicit
        .filter(|value| !value.is_empty())
        .or_else(|| std::env::var(var).ok().filter(|value| !value.is_empty()))
}
