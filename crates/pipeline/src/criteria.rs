//! Filter criteria for a single query.
//!
//! A `FilterCriteria` is built fresh from user input at the UI boundary,
//! passed into the pipeline, and discarded after the query. It is a plain
//! structured value; the pipeline never parses raw form input.

use catalog::{Amenity, GenderPolicy};
use serde::{Deserialize, Serialize};

/// Which records a user wants to see.
///
/// Every field defaults to "no filter"; absent or empty criteria never
/// exclude records. Criteria compose by AND across fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Substrings OR-matched against `location` (case-insensitive)
    #[serde(default)]
    pub location_terms: Vec<String>,

    /// Exact-match gender policy; `None` means "any"
    #[serde(default)]
    pub gender_policy: Option<GenderPolicy>,

    /// Inclusive upper price bound; `None` means unbounded
    #[serde(default)]
    pub max_price: Option<u32>,

    /// Inclusive lower rating bound; `0.0` disables the filter
    #[serde(default)]
    pub min_rating: f32,

    /// Tags AND-matched against `amenities` (record must have all)
    #[serde(default)]
    pub required_amenities: Vec<Amenity>,

    /// Free-text filter, OR-matched against name/location/description
    /// (case-insensitive substring); empty disables the filter
    #[serde(default)]
    pub search_text: String,
}

impl FilterCriteria {
    /// Criteria that match every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure OR-matched location terms
    pub fn with_location_terms(mut self, terms: Vec<String>) -> Self {
        self.location_terms = terms;
        self
    }

    /// Configure the gender policy filter
    pub fn with_gender_policy(mut self, policy: GenderPolicy) -> Self {
        self.gender_policy = Some(policy);
        self
    }

    /// Configure the inclusive maximum price
    pub fn with_max_price(mut self, max_price: u32) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Configure the inclusive minimum rating
    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Configure AND-matched required amenities
    pub fn with_required_amenities(mut self, amenities: Vec<Amenity>) -> Self {
        self.required_amenities = amenities;
        self
    }

    /// Configure the free-text filter
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// The effective rating bound, if the filter is active.
    ///
    /// NaN and out-of-range values are normalized to "no filter" here, so a
    /// criteria value deserialized from storage can never make the pipeline
    /// misbehave.
    pub fn min_rating_bound(&self) -> Option<f32> {
        if self.min_rating > 0.0 && self.min_rating <= 5.0 {
            Some(self.min_rating)
        } else {
            None
        }
    }

    /// True when no field would exclude any record
    pub fn is_empty(&self) -> bool {
        self.location_terms.is_empty()
            && self.gender_policy.is_none()
            && self.max_price.is_none()
            && self.min_rating_bound().is_none()
            && self.required_amenities.is_empty()
            && self.search_text.is_empty()
    }
}
