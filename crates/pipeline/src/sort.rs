//! Sort key selection and stable ordering of listings.
//!
//! Each `SortKey` maps to a deterministic comparator. Sorting always uses
//! the standard library's stable sort, so records comparing equal keep
//! their catalog-relative order — the UI depends on identical queries
//! rendering in the same order every time.

use catalog::Hostel;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How to order a result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order, unchanged
    #[default]
    Recommended,
    PriceAscending,
    PriceDescending,
    RatingDescending,
    /// Descending lexical id order. Ids are assumed lexically monotonic
    /// (later listings get later ids); there is no timestamp field to sort
    /// on, so non-monotonic id schemes would order arbitrarily here.
    Newest,
}

#[derive(Debug, Error)]
#[error("Unknown sort key: {0}")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    /// Accepts the canonical kebab-case names plus the listing page's
    /// short select values (`price-low`, `price-high`, `rating`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(SortKey::Recommended),
            "price-ascending" | "price-low" => Ok(SortKey::PriceAscending),
            "price-descending" | "price-high" => Ok(SortKey::PriceDescending),
            "rating-descending" | "rating" => Ok(SortKey::RatingDescending),
            "newest" => Ok(SortKey::Newest),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Recommended => "recommended",
            SortKey::PriceAscending => "price-ascending",
            SortKey::PriceDescending => "price-descending",
            SortKey::RatingDescending => "rating-descending",
            SortKey::Newest => "newest",
        };
        f.write_str(name)
    }
}

impl SortKey {
    /// The comparator this key selects.
    ///
    /// `Recommended` always returns `Equal`; under a stable sort that is
    /// the identity ordering. Ratings are validated into [0.0, 5.0] at
    /// catalog construction, so the float compare cannot see NaN.
    pub fn compare(&self, a: &Hostel, b: &Hostel) -> Ordering {
        match self {
            SortKey::Recommended => Ordering::Equal,
            SortKey::PriceAscending => a.price.cmp(&b.price),
            SortKey::PriceDescending => b.price.cmp(&a.price),
            SortKey::RatingDescending => {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }
            SortKey::Newest => b.id.cmp(&a.id),
        }
    }
}

/// Stable-sort listings by the given key.
///
/// Equal-key records keep their input order for every `SortKey`.
pub fn sort_listings<'a>(mut listings: Vec<&'a Hostel>, key: SortKey) -> Vec<&'a Hostel> {
    listings.sort_by(|a, b| key.compare(a, b));
    listings
}
