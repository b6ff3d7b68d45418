//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog snapshot
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog file couldn't be deserialized
    #[error("Invalid catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Two records share the same id
    #[error("Duplicate hostel id: {id}")]
    DuplicateId { id: String },

    /// A record's rating is outside [0.0, 5.0]
    #[error("Rating {rating} out of range for hostel {id}")]
    RatingOutOfRange { id: String, rating: f32 },

    /// A record lists the same amenity twice
    #[error("Duplicate amenity '{amenity}' on hostel {id}")]
    DuplicateAmenity { id: String, amenity: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
