//! Error types for the storage crate.

use thiserror::Error;

/// Errors from the key-value store and the flows built on it
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid stored JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Keys are single path segments; separators are rejected
    #[error("Invalid storage key: {key}")]
    InvalidKey { key: String },

    /// Registration form failed validation; every message is reported
    #[error("Registration failed: {}", .0.join("; "))]
    RegistrationInvalid(Vec<String>),

    /// An account with this email already exists
    #[error("An account already exists for {email}")]
    EmailTaken { email: String },

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StorageError>;
