// src/core/errors.rs

//! Defines the primary error type for the coordination core.

use std::sync::Arc;
use thiserror::Error;

/// The main error enum, representing all possible failures within the coordination core.
/// Using `thiserror` allows for clean error definitions and automatic `From` trait implementations.
#[derive(Error, Debug)]
pub enum StreamGridError {
    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    /// No state storage factory is registered under the configured identifier.
    /// The cluster cannot run without its state store, so this is a fatal
    /// startup condition and is never retried at this layer.
    #[error("Unknown state storage backend '{0}'")]
    UnknownBackend(String),

    /// The resolved factory failed to construct its storage handle.
    #[error("State storage initialization failed: {0}")]
    BackendInit(String),

    /// A storage operation behind the `StateStorage` seam failed.
    #[error("State storage error: {0}")]
    Storage(String),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Encoding Error: {0}")]
    Encoding(String),

    /// A configuration defect, e.g. topology authentication enabled without a payload.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal Error: {0}")]
    Internal(String),
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for StreamGridError {
    fn from(e: std::io::Error) -> Self {
        StreamGridError::Io(Arc::new(e))
    }
}

impl From<std::str::Utf8Error> for StreamGridError {
    fn from(e: std::str::Utf8Error) -> Self {
        StreamGridError::Encoding(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for StreamGridError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        StreamGridError::Encoding(e.to_string())
    }
}

impl From<bincode::error::EncodeError> for StreamGridError {
    fn from(e: bincode::error::EncodeError) -> Self {
        StreamGridError::Serialization(e.to_string())
    }
}

impl From<bincode::error::DecodeError> for StreamGridError {
    fn from(e: bincode::error::DecodeError) -> Self {
        StreamGridError::Serialization(e.to_string())
    }
}
