//! # Catalog Crate
//!
//! This crate holds the in-memory hostel catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Hostel, GenderPolicy, Amenity, Catalog)
//! - **loader**: Catalog construction, validation, and JSON loading
//! - **seed**: The built-in sample listings
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//!
//! let catalog = Catalog::sample()?;
//! let hostel = catalog.get("hv001").unwrap();
//! println!("{} — {} per month", hostel.name, hostel.price);
//! ```
//!
//! A catalog is loaded once at startup and never mutated; callers own its
//! lifetime and pass it by reference into the search pipeline.

// Public modules
pub mod error;
pub mod loader;
pub mod seed;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Amenity, Catalog, CatalogSummary, GenderPolicy, Hostel};
