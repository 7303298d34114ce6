//! Cookie transport over a server-render cookie jar.

use std::sync::{Arc, RwLock};

use cookie::CookieJar;

use crate::{adapter::CookieTransport, attributes::CookieAttributes, codec::build_cookie};

/// Cookie transport over the cookie jar of a page-rendering pass.
///
/// Reads observe values set earlier in the same pass. The jar has no
/// separate unset verb; removal is an empty value with `Max-Age=0` added
/// through the same `add` primitive. After rendering, the caller drains
/// the jar's delta into `Set-Cookie` headers.
pub struct RenderCookies {
    jar: Arc<RwLock<CookieJar>>,
}

impl RenderCookies {
    /// Creates a transport over the render pass's shared jar.
    pub fn new(jar: Arc<RwLock<CookieJar>>) -> Self {
        Self { jar }
    }
}

impl CookieTransport for RenderCookies {
    fn get_cookie(&self, name: &str) -> Option<String> {
        self.jar
            .read()
            .expect("RwLock should not be poisoned")
            .get(name)
            .map(|cookie| cookie.value().to_string())
    }

    fn set_cookie(&self, name: &str, value: &str, attributes: &CookieAttributes) {
        self.jar
            .write()
            .expect("RwLock should not be poisoned")
            .add(build_cookie(name, value, attributes));
    }
}
