//! Server-render factory.

use std::sync::{Arc, RwLock};

use cookie::CookieJar;
use sessionkit_cookies::{CookieSessionStorage, RenderCookies};
use sessionkit_core::Client;

use crate::config::{ClientConfig, ConfigurationError};

/// Creates a client for one page-rendering pass, persisting its session
/// through the pass's cookie jar.
///
/// The adapter closes over the pass's jar, so a new client must be created
/// per render pass rather than shared across requests. After rendering,
/// drain the jar's delta into `Set-Cookie` headers.
pub fn create_render_client(
    jar: Arc<RwLock<CookieJar>>,
    config: ClientConfig,
) -> Result<Client, ConfigurationError> {
    let (settings, cookie) = config.into_settings()?;
    let storage = CookieSessionStorage::new(RenderCookies::new(jar), cookie);
    Ok(Client::new(settings, Arc::new(storage)))
}
