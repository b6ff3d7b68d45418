//! Filter on average rating.

use catalog::Hostel;

use crate::criteria::FilterCriteria;
use crate::traits::Filter;

/// Keeps listings rated at or above the criteria's bound.
///
/// The bound is inclusive. `FilterCriteria::min_rating_bound` already maps
/// 0, NaN, and out-of-range values to "no filter", so this filter only ever
/// sees a usable bound.
pub struct MinRatingFilter;

impl Filter for MinRatingFilter {
    fn name(&self) -> &str {
        "MinRatingFilter"
    }

    fn apply<'a>(&self, listings: Vec<&'a Hostel>, criteria: &FilterCriteria) -> Vec<&'a Hostel> {
        let Some(min_rating) = criteria.min_rating_bound() else {
            return listings;
        };

        listings
            .into_iter()
            .filter(|hostel| hostel.rating >= min_rating)
            .collect()
    }
}
