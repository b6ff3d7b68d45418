//! Filter on listing location.
//!
//! Location checkboxes are OR-semantics: a record stays if its location
//! contains any of the selected area names.

use catalog::Hostel;

use crate::criteria::FilterCriteria;
use crate::traits::Filter;

/// Keeps listings whose location contains any of the criteria's terms.
///
/// ## Algorithm
/// Case-insensitive substring match of each term against `location`;
/// an empty term set keeps everything.
pub struct LocationFilter;

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn apply<'a>(&self, listings: Vec<&'a Hostel>, criteria: &FilterCriteria) -> Vec<&'a Hostel> {
        if criteria.location_terms.is_empty() {
            return listings;
        }

        let terms: Vec<String> = criteria
            .location_terms
            .iter()
            .map(|term| term.to_lowercase())
            .collect();

        listings
            .into_iter()
            .filter(|hostel| {
                let location = hostel.location.to_lowercase();
                terms.iter().any(|term| location.contains(term))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn test_location_filter_or_semantics() {
        let catalog = Catalog::sample().unwrap();
        let listings: Vec<&Hostel> = catalog.hostels().iter().collect();

        let criteria = FilterCriteria::new().with_location_terms(vec![
            "model town".to_string(),
            "city center".to_string(),
        ]);

        let filtered = LocationFilter.apply(listings, &criteria);
        let ids: Vec<&str> = filtered.iter().map(|h| h.id.as_str()).collect();

        // Matches either area, catalog order preserved
        assert_eq!(ids, ["hv001", "hv003", "hv006"]);
    }

    #[test]
    fn test_location_filter_case_insensitive() {
        let catalog = Catalog::sample().unwrap();
        let listings: Vec<&Hostel> = catalog.hostels().iter().collect();

        let criteria =
            FilterCriteria::new().with_location_terms(vec!["UNIVERSITY ROAD".to_string()]);

        let filtered = LocationFilter.apply(listings, &criteria);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_location_filter_empty_terms_keeps_all() {
        let catalog = Catalog::sample().unwrap();
        let listings: Vec<&Hostel> = catalog.hostels().iter().collect();

        let filtered = LocationFilter.apply(listings, &FilterCriteria::new());
        assert_eq!(filtered.len(), catalog.len());
    }
}
