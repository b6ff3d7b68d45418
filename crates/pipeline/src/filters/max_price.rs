//! Filter on monthly price.

use catalog::Hostel;

use crate::criteria::FilterCriteria;
use crate::traits::Filter;

/// Keeps listings priced at or below the criteria's bound.
///
/// The bound is inclusive. An unset bound keeps everything; a bound of 0 is
/// a legitimate (if severe) bound that excludes every positively priced
/// record, not a "no filter" sentinel.
pub struct MaxPriceFilter;

impl Filter for MaxPriceFilter {
    fn name(&self) -> &str {
        "MaxPriceFilter"
    }

    fn apply<'a>(&self, listings: Vec<&'a Hostel>, criteria: &FilterCriteria) -> Vec<&'a Hostel> {
        let Some(max_price) = criteria.max_price else {
            return listings;
        };

        listings
            .into_iter()
            .filter(|hostel| hostel.price <= max_price)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn test_max_price_inclusive_bound() {
        let catalog = Catalog::sample().unwrap();
        let listings: Vec<&Hostel> = catalog.hostels().iter().collect();

        let criteria = FilterCriteria::new().with_max_price(8000);
        let filtered = MaxPriceFilter.apply(listings, &criteria);

        // 8000 itself passes; relative order is unchanged
        let prices: Vec<u32> = filtered.iter().map(|h| h.price).collect();
        assert_eq!(prices, [8000, 7000, 6500]);
    }

    #[test]
    fn test_max_price_zero_excludes_everything() {
        let catalog = Catalog::sample().unwrap();
        let listings: Vec<&Hostel> = catalog.hostels().iter().collect();

        let criteria = FilterCriteria::new().with_max_price(0);
        let filtered = MaxPriceFilter.apply(listings, &criteria);

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_unset_bound_keeps_all() {
        let catalog = Catalog::sample().unwrap();
        let listings: Vec<&Hostel> = catalog.hostels().iter().collect();

        let filtered = MaxPriceFilter.apply(listings, &FilterCriteria::new());
        assert_eq!(filtered.len(), catalog.len());
    }
}
