//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern. Because each
//! filter is a no-op for absent criteria, applying the standard chain to
//! any criteria value computes exactly the AND of the active categories.

use catalog::Hostel;
use tracing;

use crate::criteria::FilterCriteria;
use crate::filters::{
    AmenityFilter, GenderPolicyFilter, LocationFilter, MaxPriceFilter, MinRatingFilter,
    SearchTextFilter,
};
use crate::traits::Filter;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::standard();
/// let matched = pipeline.apply(listings, &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The full criteria chain, in the order the listings page applies it:
    /// location, gender policy, price, rating, amenities, free text.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(LocationFilter)
            .add_filter(GenderPolicyFilter)
            .add_filter(MaxPriceFilter)
            .add_filter(MinRatingFilter)
            .add_filter(AmenityFilter)
            .add_filter(SearchTextFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the listings.
    ///
    /// ## Algorithm
    /// 1. Start with the input listings
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the final filtered set, in input order
    pub fn apply<'a>(
        &self,
        listings: Vec<&'a Hostel>,
        criteria: &FilterCriteria,
    ) -> Vec<&'a Hostel> {
        let mut current = listings;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
