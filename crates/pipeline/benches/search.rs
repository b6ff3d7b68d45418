//! Benchmarks for the search pipeline
//!
//! Run with: cargo bench --package pipeline

use catalog::{Amenity, Catalog, GenderPolicy, Hostel};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{FilterCriteria, SortKey, search};

/// A catalog large enough to make the linear pass measurable
fn build_bench_catalog(size: usize) -> Catalog {
    let areas = ["Model Town", "University Road", "City Center", "New City"];
    let hostels: Vec<Hostel> = (0..size)
        .map(|i| Hostel {
            id: format!("hv{i:05}"),
            name: format!("Hostel {i}"),
            location: format!("{}, Mirpur", areas[i % areas.len()]),
            description: "Bench listing".to_string(),
            price: 5000 + (i as u32 % 80) * 100,
            rating: 3.0 + (i % 20) as f32 * 0.1,
            review_count: i as u32 % 200,
            gender_policy: match i % 3 {
                0 => GenderPolicy::MaleOnly,
                1 => GenderPolicy::FemaleOnly,
                _ => GenderPolicy::Mixed,
            },
            amenities: vec![Amenity::Wifi, Amenity::Mess],
            image_url: String::new(),
        })
        .collect();

    Catalog::from_hostels(hostels).expect("bench catalog is valid")
}

fn bench_search_filtered(c: &mut Criterion) {
    let catalog = build_bench_catalog(10_000);
    let criteria = FilterCriteria::new()
        .with_location_terms(vec!["model town".to_string()])
        .with_max_price(9000)
        .with_min_rating(4.0)
        .with_required_amenities(vec![Amenity::Wifi]);

    c.bench_function("search_filtered_price_ascending", |b| {
        b.iter(|| {
            let results = search(
                black_box(&catalog),
                black_box(&criteria),
                black_box(SortKey::PriceAscending),
            );
            black_box(results)
        })
    });
}

fn bench_search_unfiltered(c: &mut Criterion) {
    let catalog = build_bench_catalog(10_000);
    let criteria = FilterCriteria::new();

    c.bench_function("search_unfiltered_recommended", |b| {
        b.iter(|| {
            let results = search(
                black_box(&catalog),
                black_box(&criteria),
                black_box(SortKey::Recommended),
            );
            black_box(results)
        })
    });
}

criterion_group!(benches, bench_search_filtered, bench_search_unfiltered);
criterion_main!(benches);
