//! Cookie transport over an in-browser document.

use crate::{
    adapter::CookieTransport,
    attributes::CookieAttributes,
    codec::{parse_cookie_header, serialize_cookie},
};

/// Capability over the live document cookie string.
///
/// Reading yields the full `Cookie`-header-formatted string; assigning a
/// serialized cookie stages a write, as with `document.cookie`.
pub trait DocumentCookies: Send + Sync {
    /// Returns the document's current cookie string.
    fn cookie_string(&self) -> String;

    /// Assigns a serialized cookie to the document.
    fn set_cookie_string(&self, assignment: &str);
}

/// Cookie transport reading and writing the browser document.
pub struct BrowserCookies<D> {
    document: D,
}

impl<D: DocumentCookies> BrowserCookies<D> {
    /// Creates a transport over `document`.
    pub fn new(document: D) -> Self {
        Self { document }
    }
}

impl<D: DocumentCookies> CookieTransport for BrowserCookies<D> {
    fn get_cookie(&self, name: &str) -> Option<String> {
        parse_cookie_header(&self.document.cookie_string()).remove(name)
    }

    fn set_cookie(&self, name: &str, value: &str, attributes: &CookieAttributes) {
        self.document
            .set_cookie_string(&serialize_cookie(name, value, attributes));
    }
}

/// [`DocumentCookies`] over the page document.
///
/// Outside a browser (during a server-side rendering pass, or on non-wasm
/// targets) reads yield nothing and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomDocumentCookies;

#[cfg(target_arch = "wasm32")]
impl DomDocumentCookies {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;

        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }
}

#[cfg(target_arch = "wasm32")]
impl DocumentCookies for DomDocumentCookies {
    fn cookie_string(&self) -> String {
        Self::document()
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }

    fn set_cookie_string(&self, assignment: &str) {
        match Self::document() {
            Some(document) => {
                if let Err(error) = document.set_cookie(assignment) {
                    tracing::warn!("Failed to write document cookie: {error:?}");
                }
            }
            None => tracing::debug!("No document in scope; dropping cookie write"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DocumentCookies for DomDocumentCookies {
    fn cookie_string(&self) -> String {
        String::new()
    }

    fn set_cookie_string(&self, _assignment: &str) {
        tracing::debug!("No document in scope; dropping cookie write");
    }
}
