//! Catalog construction and validation.
//!
//! This module builds a `Catalog` from a listing snapshot:
//! - Validate record invariants (unique ids, rating bounds, amenity sets)
//! - Build the id and amenity indices
//! - Compute catalog-level statistics

use crate::error::{CatalogError, Result};
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

impl Catalog {
    /// Build a validated catalog from a listing snapshot.
    ///
    /// The order of `hostels` becomes the catalog order. Snapshots that
    /// violate the record invariants are rejected whole; a catalog is either
    /// fully valid or not constructed.
    pub fn from_hostels(hostels: Vec<Hostel>) -> Result<Self> {
        validate(&hostels)?;

        // Primary index: id -> position
        let mut id_index = HashMap::with_capacity(hostels.len());
        for (pos, hostel) in hostels.iter().enumerate() {
            id_index.insert(hostel.id.clone(), pos);
        }

        // Secondary index: amenity -> positions, in catalog order
        let mut amenity_index: HashMap<Amenity, Vec<usize>> = HashMap::new();
        for (pos, hostel) in hostels.iter().enumerate() {
            for &amenity in &hostel.amenities {
                amenity_index.entry(amenity).or_default().push(pos);
            }
        }

        Ok(Self {
            hostels,
            id_index,
            amenity_index,
        })
    }

    /// Load a catalog from a JSON snapshot file.
    ///
    /// The file holds a JSON array of listing records, the shape a listing
    /// endpoint would return.
    pub fn load_from_json(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let hostels: Vec<Hostel> = serde_json::from_reader(BufReader::new(file))?;
        Self::from_hostels(hostels)
    }

    /// Compute catalog-level statistics.
    ///
    /// Runs as a rayon map-reduce over the listings; an empty catalog
    /// yields an all-zero summary.
    pub fn summary(&self) -> CatalogSummary {
        if self.hostels.is_empty() {
            return CatalogSummary {
                hostel_count: 0,
                min_price: 0,
                max_price: 0,
                avg_rating: 0.0,
            };
        }

        let (min_price, max_price, rating_sum) = self
            .hostels
            .par_iter()
            .map(|h| (h.price, h.price, h.rating as f64))
            .reduce(
                || (u32::MAX, 0, 0.0),
                |a, b| (a.0.min(b.0), a.1.max(b.1), a.2 + b.2),
            );

        CatalogSummary {
            hostel_count: self.hostels.len(),
            min_price,
            max_price,
            avg_rating: (rating_sum / self.hostels.len() as f64) as f32,
        }
    }
}

/// Check the record invariants for a catalog snapshot.
///
/// - ids are unique and non-empty
/// - price is positive
/// - rating is within [0.0, 5.0]
/// - no record lists an amenity twice
fn validate(hostels: &[Hostel]) -> Result<()> {
    let mut seen_ids = HashMap::with_capacity(hostels.len());
    for (pos, hostel) in hostels.iter().enumerate() {
        if hostel.id.is_empty() {
            return Err(CatalogError::InvalidValue {
                field: "id".to_string(),
                value: format!("(empty, record {pos})"),
            });
        }
        if seen_ids.insert(hostel.id.as_str(), pos).is_some() {
            return Err(CatalogError::DuplicateId {
                id: hostel.id.clone(),
            });
        }
        if hostel.price == 0 {
            return Err(CatalogError::InvalidValue {
                field: "price".to_string(),
                value: format!("0 (hostel {})", hostel.id),
            });
        }
        if !(0.0..=5.0).contains(&hostel.rating) {
            return Err(CatalogError::RatingOutOfRange {
                id: hostel.id.clone(),
                rating: hostel.rating,
            });
        }
        for (i, &amenity) in hostel.amenities.iter().enumerate() {
            if hostel.amenities[..i].contains(&amenity) {
                return Err(CatalogError::DuplicateAmenity {
                    id: hostel.id.clone(),
                    amenity: amenity.label().to_string(),
                });
            }
        }
    }
    Ok(())
}
