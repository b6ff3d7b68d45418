//! Free-text search filter.
//!
//! The search box matches against more than the location filter does: a
//! record stays if its name, location, or description contains the text.

use catalog::Hostel;

use crate::criteria::FilterCriteria;
use crate::traits::Filter;

/// Keeps listings whose name, location, or description contains the
/// criteria's search text (case-insensitive substring).
pub struct SearchTextFilter;

impl Filter for SearchTextFilter {
    fn name(&self) -> &str {
        "SearchTextFilter"
    }

    fn apply<'a>(&self, listings: Vec<&'a Hostel>, criteria: &FilterCriteria) -> Vec<&'a Hostel> {
        if criteria.search_text.is_empty() {
            return listings;
        }

        let needle = criteria.search_text.to_lowercase();

        listings
            .into_iter()
            .filter(|hostel| {
                hostel.name.to_lowercase().contains(&needle)
                    || hostel.location.to_lowercase().contains(&needle)
                    || hostel.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
