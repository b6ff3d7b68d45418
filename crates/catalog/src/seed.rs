//! Seed listing data.
//!
//! The same six records the marketing site ships as its sample catalog.
//! Used as the default when no JSON snapshot is supplied.

use crate::error::Result;
use crate::types::{Amenity, Catalog, GenderPolicy, Hostel};

impl Catalog {
    /// The built-in sample catalog
    pub fn sample() -> Result<Self> {
        Self::from_hostels(sample_hostels())
    }
}

/// The raw seed records, in catalog order
pub fn sample_hostels() -> Vec<Hostel> {
    vec![
        Hostel {
            id: "hv001".to_string(),
            name: "Green View Hostel".to_string(),
            location: "Model Town, Mirpur".to_string(),
            description: "Comfortable hostel near MUST University".to_string(),
            price: 8000,
            rating: 4.5,
            review_count: 128,
            gender_policy: GenderPolicy::MaleOnly,
            amenities: vec![
                Amenity::Wifi,
                Amenity::Ac,
                Amenity::Mess,
                Amenity::Security,
            ],
            image_url: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&w=800&q=80".to_string(),
        },
        Hostel {
            id: "hv002".to_string(),
            name: "Rose Girls Hostel".to_string(),
            location: "University Road, Mirpur".to_string(),
            description: "Exclusive girls hostel with premium facilities".to_string(),
            price: 9500,
            rating: 5.0,
            review_count: 94,
            gender_policy: GenderPolicy::FemaleOnly,
            amenities: vec![
                Amenity::Wifi,
                Amenity::Ac,
                Amenity::Mess,
                Amenity::Laundry,
                Amenity::Security,
            ],
            image_url: "https://images.unsplash.com/photo-1522771739844-6a9f6d5f14af?auto=format&fit=crop&w=800&q=80".to_string(),
        },
        Hostel {
            id: "hv003".to_string(),
            name: "City Central Hostel".to_string(),
            location: "City Center, Mirpur".to_string(),
            description: "Affordable hostel in city center".to_string(),
            price: 7000,
            rating: 4.0,
            review_count: 76,
            gender_policy: GenderPolicy::Mixed,
            amenities: vec![
                Amenity::Wifi,
                Amenity::Tv,
                Amenity::Gym,
                Amenity::Parking,
            ],
            image_url: "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?auto=format&fit=crop&w=800&q=80".to_string(),
        },
        Hostel {
            id: "hv004".to_string(),
            name: "New City Hostel".to_string(),
            location: "New City, Mirpur".to_string(),
            description: "Modern hostel in New City area".to_string(),
            price: 8500,
            rating: 4.2,
            review_count: 52,
            gender_policy: GenderPolicy::MaleOnly,
            amenities: vec![Amenity::Wifi, Amenity::Ac, Amenity::Laundry],
            image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?auto=format&fit=crop&w=800&q=80".to_string(),
        },
        Hostel {
            id: "hv005".to_string(),
            name: "University Heights".to_string(),
            location: "University Road, Mirpur".to_string(),
            description: "Premium hostel with excellent facilities".to_string(),
            price: 11000,
            rating: 4.7,
            review_count: 103,
            gender_policy: GenderPolicy::Mixed,
            amenities: vec![
                Amenity::Wifi,
                Amenity::Ac,
                Amenity::Mess,
                Amenity::Gym,
                Amenity::Security,
            ],
            image_url: "https://images.unsplash.com/photo-1560185893-a55cbc8c57e8?auto=format&fit=crop&w=800&q=80".to_string(),
        },
        Hostel {
            id: "hv006".to_string(),
            name: "Model Town Boys Hostel".to_string(),
            location: "Model Town, Mirpur".to_string(),
            description: "Budget-friendly boys hostel".to_string(),
            price: 6500,
            rating: 3.8,
            review_count: 45,
            gender_policy: GenderPolicy::MaleOnly,
            amenities: vec![Amenity::Wifi, Amenity::Mess],
            image_url: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?auto=format&fit=crop&w=800&q=80".to_string(),
        },
    ]
}
