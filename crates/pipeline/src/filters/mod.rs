//! Filter implementations for the listing pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline. One file per criteria
//! category; each filter is a no-op when its criterion is absent.

pub mod amenities;
pub mod gender_policy;
pub mod location;
pub mod max_price;
pub mod min_rating;
pub mod search_text;

// Re-export for convenience
pub use amenities::AmenityFilter;
pub use gender_policy::GenderPolicyFilter;
pub use location::LocationFilter;
pub use max_price::MaxPriceFilter;
pub use min_rating::MinRatingFilter;
pub use search_text::SearchTextFilter;
