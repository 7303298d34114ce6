//! Cookie name and attribute configuration.

pub use cookie::SameSite;

/// Name of the session cookie when no override is configured.
pub const DEFAULT_COOKIE_NAME: &str = "sessionkit-auth-token";

const ONE_YEAR_SECONDS: i64 = 60 * 60 * 24 * 365;

/// Attributes emitted on a serialized cookie.
///
/// `None` fields are left out of the serialized form entirely, so the
/// caller controls exactly what is emitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CookieAttributes {
    /// `Domain` attribute.
    pub domain: Option<String>,
    /// `Path` attribute.
    pub path: Option<String>,
    /// `Max-Age` attribute, in seconds.
    pub max_age: Option<i64>,
    /// `Secure` attribute.
    pub secure: Option<bool>,
    /// `HttpOnly` attribute.
    pub http_only: Option<bool>,
    /// `SameSite` attribute.
    pub same_site: Option<SameSite>,
}

impl CookieAttributes {
    /// Returns these attributes with `overrides` applied; a present
    /// override field wins over the base value.
    pub fn merge(&self, overrides: &CookieOverrides) -> CookieAttributes {
        CookieAttributes {
            domain: overrides.domain.clone().or_else(|| self.domain.clone()),
            path: overrides.path.clone().or_else(|| self.path.clone()),
            max_age: overrides.max_age.or(self.max_age),
            secure: overrides.secure.or(self.secure),
            http_only: overrides.http_only.or(self.http_only),
            same_site: overrides.same_site.or(self.same_site),
        }
    }
}

/// Per-call attribute overrides, merged over an adapter's configured
/// [`CookieAttributes`].
#[derive(Clone, Debug, Default)]
pub struct CookieOverrides {
    /// Overrides the `Domain` attribute.
    pub domain: Option<String>,
    /// Overrides the `Path` attribute.
    pub path: Option<String>,
    /// Overrides the `Max-Age` attribute, in seconds.
    pub max_age: Option<i64>,
    /// Overrides the `Secure` attribute.
    pub secure: Option<bool>,
    /// Overrides the `HttpOnly` attribute.
    pub http_only: Option<bool>,
    /// Overrides the `SameSite` attribute.
    pub same_site: Option<SameSite>,
}

impl CookieOverrides {
    /// Overrides that expire the cookie immediately.
    ///
    /// Deletion is modeled as an empty value with `Max-Age=0`; the
    /// receiving environment interprets that as "expire now". Not every
    /// transport has a removal primitive.
    pub fn expire_now() -> Self {
        Self {
            max_age: Some(0),
            ..Self::default()
        }
    }
}

/// Cookie name and attributes a storage adapter writes with.
#[derive(Clone, Debug)]
pub struct CookieConfig {
    /// Name the session cookie is stored under.
    pub name: String,
    /// Attributes applied to every write.
    pub attributes: CookieAttributes,
}

impl Default for CookieConfig {
    /// Weak defaults: readable from browser code (`HttpOnly` disabled),
    /// site-wide path, one-year lifetime, `SameSite=Lax`.
    fn default() -> Self {
        Self {
            name: DEFAULT_COOKIE_NAME.to_string(),
            attributes: CookieAttributes {
                path: Some("/".to_string()),
                max_age: Some(ONE_YEAR_SECONDS),
                http_only: Some(false),
                same_site: Some(SameSite::Lax),
                ..CookieAttributes::default()
            },
        }
    }
}
