//! Error types for sls-azure
//!
//! This module defines all error types used throughout the adapter.
//! Uses `thiserror` for ergonomic error handling with automatic `Display` and
//! `Error` trait implementations.

use thiserror::Error;

/// The primary error type for adapter operations.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Configuration-related errors (missing service file, invalid fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Handler strings that do not carry a `<path>.<entryPoint>` pair
    #[error("Malformed handler '{0}': expected '<path>.<entryPoint>'")]
    MalformedHandler(String),

    /// Resource not found (functions, handler files, etc.)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization errors from the service definition
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
