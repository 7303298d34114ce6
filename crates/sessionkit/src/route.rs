//! Route-handler factory.

use std::sync::{Arc, RwLock};

use http::HeaderMap;
use sessionkit_cookies::{CookieSessionStorage, RouteCookies};
use sessionkit_core::Client;

use crate::config::{ClientConfig, ConfigurationError};

/// Creates a client for one request/response cycle, persisting its session
/// through the handler's header pair.
///
/// Cookie writes are appended to the `set-cookie` (and mirrored `cookie`)
/// entries of `response_headers`; reads prefer those staged entries over
/// the original request value. The adapter closes over the pair, so a new
/// client must be created per request.
pub fn create_route_client(
    request_headers: &HeaderMap,
    response_headers: Arc<RwLock<HeaderMap>>,
    config: ClientConfig,
) -> Result<Client, ConfigurationError> {
    let (settings, cookie) = config.into_settings()?;
    let storage =
        CookieSessionStorage::new(RouteCookies::new(request_headers, response_headers), cookie);
    Ok(Client::new(settings, Arc::new(storage)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials() {
        let response = Arc::new(RwLock::new(HeaderMap::new()));

        assert_eq!(
            create_route_client(&HeaderMap::new(), response, ClientConfig::default()).err(),
            Some(ConfigurationError::MissingUrl)
        );
    }
}
