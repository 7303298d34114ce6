//! Cookie transport over a request/response header pair.

use std::sync::{Arc, RwLock};

use http::{header, HeaderMap, HeaderValue};

use crate::{
    adapter::CookieTransport,
    attributes::CookieAttributes,
    codec::{parse_cookie_header, serialize_cookie, split_set_cookie},
};

/// Cookie transport over a route handler's request and response headers.
///
/// Reads prefer cookies already staged on the response over the original
/// request value, so a handler observes its own writes before the response
/// is sent; the most recently appended entry for a name wins. Writes
/// append: the response header collections are multi-valued, and replacing
/// them would drop unrelated cookies already queued.
pub struct RouteCookies {
    request_cookies: String,
    response: Arc<RwLock<HeaderMap>>,
}

impl RouteCookies {
    /// Creates a transport reading the `Cookie` header of
    /// `request_headers` and appending to the shared `response` map.
    pub fn new(request_headers: &HeaderMap, response: Arc<RwLock<HeaderMap>>) -> Self {
        let request_cookies = request_headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            request_cookies,
            response,
        }
    }

    // Most recently staged value for `name` on the response, if any.
    fn staged_cookie(&self, name: &str) -> Option<String> {
        let response = self.response.read().expect("RwLock should not be poisoned");
        let mut staged = None;
        for entry in response.get_all(header::SET_COOKIE) {
            let Ok(entry) = entry.to_str() else { continue };
            for cookie in split_set_cookie(entry) {
                if let Some(value) = parse_cookie_header(cookie).remove(name) {
                    staged = Some(value);
                }
            }
        }
        staged
    }
}

impl CookieTransport for RouteCookies {
    fn get_cookie(&self, name: &str) -> Option<String> {
        if let Some(staged) = self.staged_cookie(name) {
            return Some(staged);
        }
        parse_cookie_header(&self.request_cookies).remove(name)
    }

    fn set_cookie(&self, name: &str, value: &str, attributes: &CookieAttributes) {
        let serialized = serialize_cookie(name, value, attributes);
        let Ok(entry) = HeaderValue::from_str(&serialized) else {
            tracing::warn!("Serialized cookie is not a valid header value; dropping write");
            return;
        };

        let mut response = self.response.write().expect("RwLock should not be poisoned");
        // Mirror the write onto the `cookie` entry so same-request code
        // reading request cookies from the response also observes it.
        response.append(header::SET_COOKIE, entry.clone());
        response.append(header::COOKIE, entry);
    }
}
