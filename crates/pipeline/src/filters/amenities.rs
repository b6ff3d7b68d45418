//! Filter on required amenities.
//!
//! Amenity checkboxes are AND-semantics, unlike location checkboxes: a
//! record must carry every selected tag to stay.

use catalog::Hostel;

use crate::criteria::FilterCriteria;
use crate::traits::Filter;

/// Keeps listings whose amenities are a superset of the required set.
pub struct AmenityFilter;

impl Filter for AmenityFilter {
    fn name(&self) -> &str {
        "AmenityFilter"
    }

    fn apply<'a>(&self, listings: Vec<&'a Hostel>, criteria: &FilterCriteria) -> Vec<&'a Hostel> {
        if criteria.required_amenities.is_empty() {
            return listings;
        }

        listings
            .into_iter()
            .filter(|hostel| {
                criteria
                    .required_amenities
                    .iter()
                    .all(|&amenity| hostel.has_amenity(amenity))
            })
            .collect()
    }
}
