#![doc = include_str!("../README.md")]

mod browser;
mod config;
mod render;
mod route;
mod singleton;

pub use browser::create_browser_client;
pub use config::{
    BrowserClientConfig, ClientConfig, ClientOptions, ConfigurationError, KEY_ENV_VAR,
    URL_ENV_VAR,
};
pub use render::create_render_client;
pub use route::create_route_client;
pub use sessionkit_cookies::{
    CookieAttributes, CookieConfig, CookieOverrides, SameSite, DEFAULT_COOKIE_NAME,
};
pub use sessionkit_core::{AuthClient, Client, Session, SessionStorage};
