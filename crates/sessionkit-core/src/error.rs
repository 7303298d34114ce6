//! Errors that can occur when using this SDK

use thiserror::Error;

/// The session could not be serialized for storage.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct SessionEncodeError(#[from] serde_json::Error);
