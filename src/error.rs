//! Error types for atrium.

use thiserror::Error;

/// Main error type for atrium operations.
///
/// Analysis and query-routing code paths never produce errors: a lookup
/// that cannot complete degrades to an informative text response instead.
/// Errors here come from the surrounding shell (configuration, the record
/// store, I/O).
#[derive(Error, Debug)]
pub enum AtriumError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Record-store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Schedule end must be after start ({start} >= {end})")]
    InvalidTimeRange { start: String, end: String },

    #[error("Malformed record in {collection}: {reason}")]
    MalformedRecord { collection: String, reason: String },
}

/// Result type alias for atrium operations.
pub type Result<T> = std::result::Result<T, AtriumError>;
