#![doc = include_str!("../README.md")]

pub mod adapter;
pub mod attributes;
pub mod browser;
pub mod chunks;
pub mod codec;
pub mod render;
pub mod route;

pub use adapter::{CookieSessionStorage, CookieTransport};
pub use attributes::{
    CookieAttributes, CookieConfig, CookieOverrides, SameSite, DEFAULT_COOKIE_NAME,
};
pub use browser::{BrowserCookies, DocumentCookies, DomDocumentCookies};
pub use render::RenderCookies;
pub use route::RouteCookies;
