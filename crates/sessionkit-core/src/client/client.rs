use std::sync::Arc;

use reqwest::header::{self, HeaderValue};

use crate::{client::client_settings::ClientSettings, storage::SessionStorage};

/// The main handle to a sessionkit session service.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance. The browser singleton hands out clones of one client, so
    // any mutable state needs to live behind the Arc as part of [`InternalClient`].
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

/// Shared state behind a [`Client`] handle.
pub struct InternalClient {
    pub(crate) http_client: reqwest::Client,
    pub(crate) url: String,
    pub(crate) key: String,
    pub(crate) storage: Arc<dyn SessionStorage>,
    pub(crate) storage_key: String,
}

impl std::fmt::Debug for InternalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalClient")
            .field("url", &self.url)
            .field("storage_key", &self.storage_key)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a new client persisting its session through `storage`.
    pub fn new(settings: ClientSettings, storage: Arc<dyn SessionStorage>) -> Self {
        let headers = build_default_headers(&settings);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("HTTP client build should not fail");

        Self {
            internal: Arc::new(InternalClient {
                http_client,
                url: settings.url,
                key: settings.key,
                storage,
                storage_key: settings.storage_key,
            }),
        }
    }

    /// Base URL of the session service.
    pub fn url(&self) -> &str {
        &self.internal.url
    }

    /// Publishable API key sent with every request.
    pub fn key(&self) -> &str {
        &self.internal.key
    }

    /// The HTTP client carrying the default header set.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.internal.http_client
    }

    pub(crate) fn storage(&self) -> &Arc<dyn SessionStorage> {
        &self.internal.storage
    }

    pub(crate) fn storage_key(&self) -> &str {
        &self.internal.storage_key
    }
}

/// Build default headers for the service HTTP client.
fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    // Handle required headers

    headers.append(
        "apikey",
        HeaderValue::from_str(&settings.key).expect("key should be a valid header value"),
    );

    // Handle caller-supplied headers, which override the defaults

    for (name, value) in &settings.headers {
        let name = header::HeaderName::from_bytes(name.as_bytes())
            .expect("header name should be valid");
        let value = HeaderValue::from_str(value).expect("header value should be valid");
        headers.insert(name, value);
    }

    headers
}
