//! Core domain types for the hostel catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system:
//! - `Hostel`: a single listing record
//! - `GenderPolicy` and `Amenity`: closed enums for the fixed value sets
//! - `Catalog`: the immutable in-memory collection of listings

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Listing-related Types
// =============================================================================

/// Who a hostel admits.
///
/// Serialized as `male` / `female` / `both` to stay compatible with the
/// existing listing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderPolicy {
    #[serde(rename = "male")]
    MaleOnly,
    #[serde(rename = "female")]
    FemaleOnly,
    #[serde(rename = "both")]
    Mixed,
}

impl GenderPolicy {
    /// Human-readable badge text, as shown on listing cards
    pub fn label(&self) -> &'static str {
        match self {
            GenderPolicy::MaleOnly => "Male Only",
            GenderPolicy::FemaleOnly => "Female Only",
            GenderPolicy::Mixed => "Both Genders",
        }
    }
}

impl FromStr for GenderPolicy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "male" => Ok(GenderPolicy::MaleOnly),
            "female" => Ok(GenderPolicy::FemaleOnly),
            "both" | "mixed" => Ok(GenderPolicy::Mixed),
            _ => Err(CatalogError::InvalidValue {
                field: "gender_policy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GenderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Amenity tags a hostel can carry.
///
/// A closed enum instead of free-form strings, so rate/label lookups are
/// exhaustively matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Wifi,
    Ac,
    Mess,
    Security,
    Laundry,
    Tv,
    Gym,
    Parking,
}

impl Amenity {
    /// Display label, as shown on listing cards
    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Wifi => "WiFi",
            Amenity::Ac => "AC",
            Amenity::Mess => "Mess",
            Amenity::Security => "Security",
            Amenity::Laundry => "Laundry",
            Amenity::Tv => "TV",
            Amenity::Gym => "Gym",
            Amenity::Parking => "Parking",
        }
    }

    /// All known amenities, in display order
    pub const ALL: [Amenity; 8] = [
        Amenity::Wifi,
        Amenity::Ac,
        Amenity::Mess,
        Amenity::Security,
        Amenity::Laundry,
        Amenity::Tv,
        Amenity::Gym,
        Amenity::Parking,
    ];
}

impl FromStr for Amenity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wifi" => Ok(Amenity::Wifi),
            "ac" => Ok(Amenity::Ac),
            "mess" => Ok(Amenity::Mess),
            "security" => Ok(Amenity::Security),
            "laundry" => Ok(Amenity::Laundry),
            "tv" => Ok(Amenity::Tv),
            "gym" => Ok(Amenity::Gym),
            "parking" => Ok(Amenity::Parking),
            _ => Err(CatalogError::InvalidValue {
                field: "amenity".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single hostel listing.
///
/// Records are immutable for the lifetime of the catalog snapshot that
/// contains them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostel {
    /// Unique id, stable across the catalog's lifetime (e.g. "hv001")
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    /// Monthly price in whole currency units
    pub price: u32,
    /// Average rating in [0.0, 5.0]
    pub rating: f32,
    pub review_count: u32,
    pub gender_policy: GenderPolicy,
    /// Amenity tags; no duplicates (validated at catalog construction)
    pub amenities: Vec<Amenity>,
    /// Card image; opaque to everything but the renderer
    pub image_url: String,
}

impl Hostel {
    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }
}

// =============================================================================
// Aggregate Statistics
// =============================================================================

/// Catalog-level statistics, computed once at load time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub hostel_count: usize,
    pub min_price: u32,
    pub max_price: u32,
    pub avg_rating: f32,
}

// =============================================================================
// Catalog - The In-Memory Listing Collection
// =============================================================================

/// The full in-memory collection of hostel listings.
///
/// A `Catalog` is built once (from seed data or a JSON snapshot), validated,
/// and never mutated afterwards. The order of `hostels` is the catalog order
/// that "recommended" sorting and tie-breaking preserve.
#[derive(Debug)]
pub struct Catalog {
    /// Listings in catalog order
    pub(crate) hostels: Vec<Hostel>,
    /// Lookup from hostel id to position in `hostels`
    pub(crate) id_index: HashMap<String, usize>,
    /// Positions of the hostels carrying each amenity, in catalog order
    pub(crate) amenity_index: HashMap<Amenity, Vec<usize>>,
}

impl Catalog {
    /// Get a hostel by id
    pub fn get(&self, id: &str) -> Option<&Hostel> {
        self.id_index.get(id).map(|&pos| &self.hostels[pos])
    }

    /// All listings, in catalog order
    pub fn hostels(&self) -> &[Hostel] {
        &self.hostels
    }

    /// All listings carrying the given amenity, in catalog order
    pub fn with_amenity(&self, amenity: Amenity) -> Vec<&Hostel> {
        self.amenity_index
            .get(&amenity)
            .map(|positions| positions.iter().map(|&pos| &self.hostels[pos]).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.hostels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hostels.is_empty()
    }
}
