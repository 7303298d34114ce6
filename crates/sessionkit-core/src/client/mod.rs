//! Sessionkit SDK Client

#[allow(clippy::module_inception)]
mod client;
#[allow(missing_docs)]
pub mod client_settings;

pub use client::{Client, InternalClient};
pub use client_settings::ClientSettings;
