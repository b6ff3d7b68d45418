//! Error types for the booking crate.

use std::fmt;
use thiserror::Error;

/// A single failed field in a booking form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors that can occur while building a booking
#[derive(Error, Debug)]
pub enum BookingError {
    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Guest details failed validation; every failing field is reported
    #[error("Invalid booking details ({} field(s))", .0.len())]
    InvalidDetails(Vec<FieldError>),

    /// Check-in plus duration doesn't yield a representable date
    #[error("Invalid check-in date: {0}")]
    InvalidDate(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, BookingError>;
