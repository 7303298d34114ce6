#![doc = include_str!("../README.md")]

pub mod auth;
pub mod client;
mod error;
pub mod session;
pub mod storage;

pub use auth::AuthClient;
pub use client::{Client, ClientSettings};
pub use error::SessionEncodeError;
pub use session::Session;
pub use storage::{InMemorySessionStorage, SessionStorage};
