//! Core trait for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to listing sets.

use catalog::Hostel;

use crate::criteria::FilterCriteria;

/// Core trait for filtering listings.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the listing Vec and return a filtered Vec;
///   the records themselves stay borrowed from the catalog
/// - A filter whose criterion is absent/empty must return its input
///   unchanged (absent criteria never exclude records)
/// - Filters are total: there is no input for which they can fail
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of listings.
    ///
    /// # Arguments
    /// * `listings` - The listings to filter (takes ownership of the Vec)
    /// * `criteria` - The criteria for this query
    ///
    /// # Returns
    /// The listings that pass this filter, in their input order
    fn apply<'a>(&self, listings: Vec<&'a Hostel>, criteria: &FilterCriteria) -> Vec<&'a Hostel>;
}
