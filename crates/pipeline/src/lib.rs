//! Pipeline for filtering and sorting hostel listings.
//!
//! This crate provides:
//! - FilterCriteria: the structured description of a query
//! - Filter trait and implementations, one per criteria category
//! - FilterPipeline for composing filters
//! - SortKey comparator selection and stable sorting
//! - `search`: the pure filter-then-sort entry point
//!
//! ## Architecture
//! The pipeline processes a catalog in two independent stages:
//! 1. Filters remove listings that fail the active criteria (AND across
//!    categories; each filter is a no-op when its criterion is absent)
//! 2. A stable sort orders the survivors by the selected key
//!
//! The pipeline holds no state between queries and performs no I/O; the
//! caller owns the catalog and supplies fresh criteria per query.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::Catalog;
//! use pipeline::{FilterCriteria, SortKey, search};
//!
//! let catalog = Catalog::sample()?;
//! let criteria = FilterCriteria::new()
//!     .with_max_price(9000)
//!     .with_search_text("university");
//!
//! let results = search(&catalog, &criteria, SortKey::PriceAscending);
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod query;
pub mod sort;
pub mod traits;

// Re-export main types
pub use criteria::FilterCriteria;
pub use filter_pipeline::FilterPipeline;
pub use query::search;
pub use sort::{ParseSortKeyError, SortKey, sort_listings};
pub use traits::Filter;
