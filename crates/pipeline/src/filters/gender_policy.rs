//! Filter on a hostel's gender policy.

use catalog::Hostel;

use crate::criteria::FilterCriteria;
use crate::traits::Filter;

/// Keeps listings whose gender policy exactly matches the criteria's.
///
/// "Any" is represented by an unset criteria field, which keeps everything;
/// there is no partial match between policies (a mixed hostel does not
/// satisfy a female-only filter).
pub struct GenderPolicyFilter;

impl Filter for GenderPolicyFilter {
    fn name(&self) -> &str {
        "GenderPolicyFilter"
    }

    fn apply<'a>(&self, listings: Vec<&'a Hostel>, criteria: &FilterCriteria) -> Vec<&'a Hostel> {
        let Some(policy) = criteria.gender_policy else {
            return listings;
        };

        listings
            .into_iter()
            .filter(|hostel| hostel.gender_policy == policy)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, GenderPolicy};

    #[test]
    fn test_female_only_excludes_male_and_mixed() {
        // Seed catalog contains all three policy kinds
        let catalog = Catalog::sample().unwrap();
        let listings: Vec<&Hostel> = catalog.hostels().iter().collect();

        let criteria = FilterCriteria::new().with_gender_policy(GenderPolicy::FemaleOnly);
        let filtered = GenderPolicyFilter.apply(listings, &criteria);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "hv002");
        assert!(
            filtered
                .iter()
                .all(|h| h.gender_policy == GenderPolicy::FemaleOnly)
        );
    }

    #[test]
    fn test_unset_policy_keeps_all() {
        let catalog = Catalog::sample().unwrap();
        let listings: Vec<&Hostel> = catalog.hostels().iter().collect();

        let filtered = GenderPolicyFilter.apply(listings, &FilterCriteria::new());
        assert_eq!(filtered.len(), catalog.len());
    }
}
