//! Typed error handling for reactify
//!
//! Reaction operations never raise a domain error of their own: every failure
//! comes from the persistence layer (wrapped unmodified in
//! [`ReactifyError::Storage`]), from configuration loading, or from a query
//! scope that could not resolve a user.
//!
//! # Error Categories
//!
//! - [`StorageError`]: Errors raised by a `ReactionStore` / `CounterStore` backend
//! - [`ConfigError`]: Errors related to configuration parsing
//! - [`ReactifyError::Unauthenticated`]: No explicit user and no current identity
//!
//! # Example
//!
//! ```rust,ignore
//! match manager.react("user-1", ReactionType::Like).await {
//!     Ok(()) => {}
//!     Err(ReactifyError::Storage(StorageError::IntegrityError { message })) => {
//!         eprintln!("Concurrent duplicate reaction: {}", message);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = ReactifyError> = std::result::Result<T, E>;

/// The main error type for reactify
#[derive(Debug, Error)]
pub enum ReactifyError {
    /// Storage backend errors, propagated as raised by the backend
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A query scope needed the current user but none is authenticated
    #[error("No user id given and no authenticated user in context")]
    Unauthenticated,
}

impl ReactifyError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ReactifyError::Storage(e) => e.error_code(),
            ReactifyError::Config(_) => "CONFIG_ERROR",
            ReactifyError::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Connection error
    #[error("Failed to connect to {backend}: {message}")]
    ConnectionError { backend: String, message: String },

    /// Query execution error
    #[error("{backend} query error: {message}")]
    QueryError { backend: String, message: String },

    /// Constraint violation (e.g. a second reaction for the same user)
    #[error("Data integrity error: {message}")]
    IntegrityError { message: String },

    /// A stored row could not be decoded into a domain value
    #[error("Failed to decode {what}: {message}")]
    Decode { what: String, message: String },

    /// Backend not available
    #[error("Storage backend '{backend}' is unavailable")]
    Unavailable { backend: String },
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::ConnectionError { .. } => "STORAGE_CONNECTION_ERROR",
            StorageError::QueryError { .. } => "STORAGE_QUERY_ERROR",
            StorageError::IntegrityError { .. } => "STORAGE_INTEGRITY_ERROR",
            StorageError::Decode { .. } => "STORAGE_DECODE_ERROR",
            StorageError::Unavailable { .. } => "STORAGE_UNAVAILABLE",
        }
    }

    /// Shorthand for a query error raised by `backend`
    pub fn query(backend: &str, message: impl std::fmt::Display) -> Self {
        StorageError::QueryError {
            backend: backend.to_string(),
            message: message.to_string(),
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Configuration file exists but could not be read
    #[error("Failed to read configuration file {path}: {message}")]
    Io { path: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    /// A field holds a value outside its allowed range
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            message: err.to_string(),
        }
    }
}
