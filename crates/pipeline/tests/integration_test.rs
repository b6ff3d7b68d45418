//! Integration tests for the listing pipeline.
//!
//! These exercise the filter/sort laws the listings page relies on:
//! identity on empty criteria, AND-composition, idempotent filtering, and
//! stable ordering for every sort key.

use catalog::{Amenity, Catalog, GenderPolicy, Hostel};
use pipeline::{FilterCriteria, FilterPipeline, SortKey, search, sort_listings};

fn hostel(
    id: &str,
    name: &str,
    price: u32,
    rating: f32,
    gender_policy: GenderPolicy,
    amenities: Vec<Amenity>,
) -> Hostel {
    Hostel {
        id: id.to_string(),
        name: name.to_string(),
        location: "Test Town".to_string(),
        description: format!("{name} test listing"),
        price,
        rating,
        review_count: 10,
        gender_policy,
        amenities,
        image_url: String::new(),
    }
}

fn ids<'a>(listings: &[&'a Hostel]) -> Vec<&'a str> {
    listings.iter().map(|h| h.id.as_str()).collect()
}

#[test]
fn empty_criteria_with_recommended_sort_is_identity() {
    let catalog = Catalog::sample().unwrap();

    let results = search(&catalog, &FilterCriteria::new(), SortKey::Recommended);

    let expected: Vec<&str> = catalog.hostels().iter().map(|h| h.id.as_str()).collect();
    assert_eq!(ids(&results), expected);
}

#[test]
fn zero_price_bound_excludes_all_positively_priced_records() {
    let catalog = Catalog::sample().unwrap();

    let criteria = FilterCriteria::new().with_max_price(0);
    let results = search(&catalog, &criteria, SortKey::Recommended);

    assert!(results.is_empty());
}

#[test]
fn filtering_is_idempotent() {
    let catalog = Catalog::sample().unwrap();
    let criteria = FilterCriteria::new()
        .with_max_price(9000)
        .with_required_amenities(vec![Amenity::Wifi])
        .with_search_text("hostel");

    let pipeline = FilterPipeline::standard();
    let listings: Vec<&Hostel> = catalog.hostels().iter().collect();

    let once = pipeline.apply(listings, &criteria);
    let twice = pipeline.apply(once.clone(), &criteria);

    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn refiltering_a_rebuilt_catalog_changes_nothing() {
    let catalog = Catalog::sample().unwrap();
    let criteria = FilterCriteria::new().with_min_rating(4.0);

    let first = search(&catalog, &criteria, SortKey::Recommended);
    let first_ids: Vec<String> = first.iter().map(|h| h.id.clone()).collect();

    // Feed the result set back in as its own catalog
    let refiltered_catalog =
        Catalog::from_hostels(first.into_iter().cloned().collect()).unwrap();
    let second = search(&refiltered_catalog, &criteria, SortKey::Recommended);
    let second_ids: Vec<String> = second.iter().map(|h| h.id.clone()).collect();

    assert_eq!(first_ids, second_ids);
}

#[test]
fn sorting_is_stable_for_every_key() {
    // Deliberate key collisions: equal prices, equal ratings
    let catalog = Catalog::from_hostels(vec![
        hostel("h01", "Alpha", 5000, 4.0, GenderPolicy::Mixed, vec![]),
        hostel("h02", "Bravo", 5000, 3.5, GenderPolicy::Mixed, vec![]),
        hostel("h03", "Charlie", 4000, 4.0, GenderPolicy::Mixed, vec![]),
        hostel("h04", "Delta", 5000, 3.5, GenderPolicy::Mixed, vec![]),
        hostel("h05", "Echo", 4000, 4.0, GenderPolicy::Mixed, vec![]),
    ])
    .unwrap();
    let listings: Vec<&Hostel> = catalog.hostels().iter().collect();

    let sorted = sort_listings(listings.clone(), SortKey::PriceAscending);
    assert_eq!(ids(&sorted), ["h03", "h05", "h01", "h02", "h04"]);

    let sorted = sort_listings(listings.clone(), SortKey::PriceDescending);
    assert_eq!(ids(&sorted), ["h01", "h02", "h04", "h03", "h05"]);

    let sorted = sort_listings(listings.clone(), SortKey::RatingDescending);
    assert_eq!(ids(&sorted), ["h01", "h03", "h05", "h02", "h04"]);

    let sorted = sort_listings(listings.clone(), SortKey::Recommended);
    assert_eq!(ids(&sorted), ["h01", "h02", "h03", "h04", "h05"]);

    // Ids are unique so Newest has no ties, but the order must still be
    // deterministic: strictly descending ids
    let sorted = sort_listings(listings, SortKey::Newest);
    assert_eq!(ids(&sorted), ["h05", "h04", "h03", "h02", "h01"]);
}

#[test]
fn required_amenities_use_and_semantics() {
    let catalog = Catalog::from_hostels(vec![
        hostel(
            "h01",
            "Full House",
            6000,
            4.0,
            GenderPolicy::Mixed,
            vec![Amenity::Wifi, Amenity::Ac],
        ),
        hostel(
            "h02",
            "Half House",
            6000,
            4.0,
            GenderPolicy::Mixed,
            vec![Amenity::Wifi],
        ),
    ])
    .unwrap();

    let criteria =
        FilterCriteria::new().with_required_amenities(vec![Amenity::Wifi, Amenity::Ac]);
    let results = search(&catalog, &criteria, SortKey::Recommended);

    // One missing tag is enough to exclude
    assert_eq!(ids(&results), ["h01"]);
}

#[test]
fn price_bound_keeps_original_relative_order() {
    let catalog = Catalog::from_hostels(vec![
        hostel("h01", "First", 8000, 4.0, GenderPolicy::Mixed, vec![]),
        hostel("h02", "Second", 9500, 4.0, GenderPolicy::Mixed, vec![]),
        hostel("h03", "Third", 7000, 4.0, GenderPolicy::Mixed, vec![]),
    ])
    .unwrap();

    let criteria = FilterCriteria::new().with_max_price(8000);
    let results = search(&catalog, &criteria, SortKey::Recommended);

    let prices: Vec<u32> = results.iter().map(|h| h.price).collect();
    assert_eq!(prices, [8000, 7000]);
}

#[test]
fn price_ascending_orders_numerically() {
    let catalog = Catalog::from_hostels(vec![
        hostel("h01", "First", 9500, 4.0, GenderPolicy::Mixed, vec![]),
        hostel("h02", "Second", 7000, 4.0, GenderPolicy::Mixed, vec![]),
        hostel("h03", "Third", 8000, 4.0, GenderPolicy::Mixed, vec![]),
    ])
    .unwrap();

    let results = search(&catalog, &FilterCriteria::new(), SortKey::PriceAscending);

    let prices: Vec<u32> = results.iter().map(|h| h.price).collect();
    assert_eq!(prices, [7000, 8000, 9500]);
}

#[test]
fn search_text_matches_single_record_by_name() {
    let catalog = Catalog::sample().unwrap();

    let criteria = FilterCriteria::new().with_search_text("girls");
    let results = search(&catalog, &criteria, SortKey::Recommended);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Rose Girls Hostel");
}

#[test]
fn female_only_filter_excludes_other_policies() {
    // Catalog carries all three policy kinds
    let catalog = Catalog::from_hostels(vec![
        hostel("h01", "Boys Place", 6000, 4.0, GenderPolicy::MaleOnly, vec![]),
        hostel("h02", "Girls Place", 6000, 4.0, GenderPolicy::FemaleOnly, vec![]),
        hostel("h03", "Open Place", 6000, 4.0, GenderPolicy::Mixed, vec![]),
    ])
    .unwrap();

    let criteria = FilterCriteria::new().with_gender_policy(GenderPolicy::FemaleOnly);
    let results = search(&catalog, &criteria, SortKey::Recommended);

    assert_eq!(ids(&results), ["h02"]);
}

#[test]
fn combined_criteria_full_query() {
    let catalog = Catalog::sample().unwrap();

    // University Road, any gender, <= 11000, >= 4.5, wifi+mess
    let criteria = FilterCriteria::new()
        .with_location_terms(vec!["university road".to_string()])
        .with_max_price(11000)
        .with_min_rating(4.5)
        .with_required_amenities(vec![Amenity::Wifi, Amenity::Mess]);

    let results = search(&catalog, &criteria, SortKey::PriceAscending);
    assert_eq!(ids(&results), ["hv002", "hv005"]);
}
