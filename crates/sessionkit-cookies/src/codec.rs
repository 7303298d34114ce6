//! Parsing and serialization of cookie header strings.

use std::collections::HashMap;

use cookie::{time::Duration, Cookie};

use crate::attributes::CookieAttributes;

/// Parses a `Cookie` request header into a name-keyed map.
///
/// The last occurrence wins on duplicate names; names and values are
/// percent-decoded. A malformed segment is skipped and parsing continues
/// with the remaining pairs. Empty input yields an empty map, never an
/// error.
pub fn parse_cookie_header(header: &str) -> HashMap<String, String> {
    let mut cookies = HashMap::new();
    for cookie in Cookie::split_parse_encoded(header.to_owned()).flatten() {
        cookies.insert(cookie.name().to_string(), cookie.value().to_string());
    }
    cookies
}

/// Builds a cookie carrying exactly the attributes present in `attributes`.
pub fn build_cookie(name: &str, value: &str, attributes: &CookieAttributes) -> Cookie<'static> {
    let mut cookie = Cookie::new(name.to_owned(), value.to_owned());
    if let Some(domain) = &attributes.domain {
        cookie.set_domain(domain.clone());
    }
    if let Some(path) = &attributes.path {
        cookie.set_path(path.clone());
    }
    if let Some(max_age) = attributes.max_age {
        cookie.set_max_age(Duration::seconds(max_age));
    }
    if let Some(secure) = attributes.secure {
        cookie.set_secure(secure);
    }
    if let Some(http_only) = attributes.http_only {
        cookie.set_http_only(http_only);
    }
    if let Some(same_site) = attributes.same_site {
        cookie.set_same_site(same_site);
    }
    cookie
}

/// Renders a `Set-Cookie` string for `name=value` with the present
/// attributes, percent-encoding the pair.
pub fn serialize_cookie(name: &str, value: &str, attributes: &CookieAttributes) -> String {
    build_cookie(name, value, attributes).encoded().to_string()
}

/// Splits a combined `Set-Cookie` header into individual cookie strings.
///
/// A comma only terminates a cookie when the text after it, ignoring
/// whitespace, starts a new `name=` pair; commas inside attribute values
/// such as `Expires` dates do not split. Each call returns a fresh
/// iterator over the same input.
pub fn split_set_cookie(header: &str) -> SplitSetCookie<'_> {
    SplitSetCookie { header, pos: 0 }
}

/// Iterator over the individual cookie strings of a combined header.
///
/// Returned by [`split_set_cookie`].
#[derive(Clone, Debug)]
pub struct SplitSetCookie<'a> {
    header: &'a str,
    pos: usize,
}

impl<'a> Iterator for SplitSetCookie<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.header.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() {
            if bytes[self.pos] != b',' {
                self.pos += 1;
                continue;
            }

            // Look ahead past the comma: only a following `name=` pair
            // makes this a cookie boundary.
            let comma = self.pos;
            let mut ahead = comma + 1;
            while ahead < bytes.len() && bytes[ahead].is_ascii_whitespace() {
                ahead += 1;
            }
            let next_start = ahead;
            while ahead < bytes.len() && !matches!(bytes[ahead], b'=' | b';' | b',') {
                ahead += 1;
            }

            if ahead < bytes.len() && bytes[ahead] == b'=' {
                self.pos = next_start;
                return Some(self.header[start..comma].trim());
            }
            self.pos = comma + 1;
        }

        Some(self.header[start..].trim())
    }
}
