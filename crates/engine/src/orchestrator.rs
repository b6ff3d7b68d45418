//! # Search Orchestrator
//!
//! This module coordinates a full listings query and the booking flow:
//! 1. Run the filter pipeline over the catalog
//! 2. Apply the selected sort
//! 3. Remember the criteria as the last search (best effort)
//! 4. Hand ordered results to the renderer
//!
//! Booking confirmation sits behind a simulated processing delay, the
//! stand-in for a booking API round trip: fire, wait an opaque interval,
//! no retry, no cancellation.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use tokio::time::{Duration, sleep};
use tracing::{info, warn};

use booking::{Booking, BookingRequest, GuestDetails};
use catalog::{Catalog, Hostel};
use pipeline::{FilterCriteria, FilterPipeline, SortKey, sort_listings};
use storage::{Store, Wishlist};

const LAST_SEARCH_KEY: &str = "last_search";
const USER_BOOKINGS_KEY: &str = "user_bookings";
const ALL_BOOKINGS_KEY: &str = "all_bookings";

/// How long booking confirmation pretends to talk to a backend
const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// An ordered result set plus the counts the listings page shows
/// ("Showing X of Y hostels"). Empty `listings` is the normal
/// no-results outcome, not an error.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub listings: Vec<Hostel>,
    pub matched: usize,
    pub total: usize,
}

/// The last-used criteria and sort, as persisted across runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSearch {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
}

/// Main orchestrator wiring the catalog, the filter pipeline, and the
/// persistence bridge.
pub struct SearchOrchestrator {
    catalog: Arc<Catalog>,
    filter_pipeline: FilterPipeline,
    store: Store,
}

impl SearchOrchestrator {
    pub fn new(catalog: Arc<Catalog>, store: Store) -> Self {
        Self {
            catalog,
            filter_pipeline: FilterPipeline::standard(),
            store,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Run a query and remember it as the last search.
    ///
    /// The pipeline itself is pure; persistence is a side channel that can
    /// only ever produce a warning.
    pub fn search(&self, criteria: &FilterCriteria, sort: SortKey) -> SearchResults {
        let start_time = Instant::now();

        let listings: Vec<&Hostel> = self.catalog.hostels().iter().collect();
        let total = listings.len();

        let matched = self.filter_pipeline.apply(listings, criteria);
        info!("Applied filters, listings remaining: {}", matched.len());

        let ordered = sort_listings(matched, sort);

        let saved = SavedSearch {
            criteria: criteria.clone(),
            sort,
        };
        if let Err(err) = self.store.set(LAST_SEARCH_KEY, &saved) {
            warn!("Could not persist last search: {err}");
        }

        info!(
            "Query matched {} of {} listings in {:.2?}",
            ordered.len(),
            total,
            start_time.elapsed()
        );

        SearchResults {
            matched: ordered.len(),
            total,
            listings: ordered.into_iter().cloned().collect(),
        }
    }

    /// The persisted last search, if any.
    ///
    /// A corrupt or unreadable entry degrades to `None`; restoring old
    /// criteria is never worth failing a page load over.
    pub fn last_search(&self) -> Option<SavedSearch> {
        match self.store.get(LAST_SEARCH_KEY) {
            Ok(saved) => saved,
            Err(err) => {
                warn!("Could not restore last search: {err}");
                None
            }
        }
    }

    /// Book a stay at a hostel.
    ///
    /// Validates the request, waits out the simulated processing delay,
    /// then appends the booking to both history views.
    pub async fn book(
        &self,
        hostel_id: &str,
        request: BookingRequest,
        guest: GuestDetails,
    ) -> Result<Booking> {
        let hostel = self
            .catalog
            .get(hostel_id)
            .ok_or_else(|| anyhow!("Hostel {hostel_id} not found"))?;

        let record = Booking::create(hostel, request, guest)?;
        info!(
            "Processing booking {} for {} ({} months, total {})",
            record.booking_id, record.hostel_name, record.duration_months, record.quote.total
        );

        sleep(PROCESSING_DELAY).await;

        self.append_booking(&record)?;
        info!("Booking {} saved", record.booking_id);
        Ok(record)
    }

    /// The current user's booking history, oldest first
    pub fn bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.store.get(USER_BOOKINGS_KEY)?.unwrap_or_default())
    }

    /// Every booking for one hostel, the warden's view
    pub fn hostel_bookings(&self, hostel_id: &str) -> Result<Vec<Booking>> {
        let all: Vec<Booking> = self.store.get(ALL_BOOKINGS_KEY)?.unwrap_or_default();
        Ok(all
            .into_iter()
            .filter(|booking| booking.hostel_id == hostel_id)
            .collect())
    }

    /// Flip a hostel's wishlist state; returns true when it is now saved.
    pub fn toggle_wishlist(&self, hostel_id: &str) -> Result<bool> {
        if self.catalog.get(hostel_id).is_none() {
            return Err(anyhow!("Hostel {hostel_id} not found"));
        }
        Ok(Wishlist::new(&self.store).toggle(hostel_id)?)
    }

    /// Wishlisted listings, resolved against the catalog.
    ///
    /// Ids that no longer resolve (catalog swapped under a saved wishlist)
    /// are skipped.
    pub fn wishlist(&self) -> Result<Vec<Hostel>> {
        let ids = Wishlist::new(&self.store).ids()?;
        Ok(ids
            .iter()
            .filter_map(|id| self.catalog.get(id).cloned())
            .collect())
    }

    fn append_booking(&self, record: &Booking) -> Result<()> {
        let mut mine: Vec<Booking> = self.store.get(USER_BOOKINGS_KEY)?.unwrap_or_default();
        mine.push(record.clone());
        self.store.set(USER_BOOKINGS_KEY, &mine)?;

        let mut all: Vec<Booking> = self.store.get(ALL_BOOKINGS_KEY)?.unwrap_or_default();
        all.push(record.clone());
        self.store.set(ALL_BOOKINGS_KEY, &all)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking::RoomType;
    use catalog::GenderPolicy;
    use chrono::NaiveDate;

    fn orchestrator() -> (tempfile::TempDir, SearchOrchestrator) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("store")).unwrap();
        let catalog = Arc::new(Catalog::sample().unwrap());
        (dir, SearchOrchestrator::new(catalog, store))
    }

    fn guest() -> GuestDetails {
        GuestDetails {
            first_name: "Ahmed".to_string(),
            last_name: "Khan".to_string(),
            email: "ahmed@test.com".to_string(),
            phone: "03001234567".to_string(),
            cnic: "12345-1234567-1".to_string(),
            university: "MUST".to_string(),
            student_id: "FA22-BSE-013".to_string(),
            emergency_name: "Bilal Khan".to_string(),
            emergency_phone: "03017654321".to_string(),
            special_requests: Some("Ground floor room".to_string()),
        }
    }

    #[test]
    fn test_search_counts_and_persists_last_search() {
        let (_dir, orchestrator) = orchestrator();

        let criteria = FilterCriteria::new().with_gender_policy(GenderPolicy::FemaleOnly);
        let results = orchestrator.search(&criteria, SortKey::PriceAscending);

        assert_eq!(results.total, 6);
        assert_eq!(results.matched, 1);
        assert_eq!(results.listings[0].id, "hv002");

        let saved = orchestrator.last_search().unwrap();
        assert_eq!(saved.criteria, criteria);
        assert_eq!(saved.sort, SortKey::PriceAscending);
    }

    #[test]
    fn test_search_with_no_matches_is_a_normal_outcome() {
        let (_dir, orchestrator) = orchestrator();

        let criteria = FilterCriteria::new().with_max_price(100);
        let results = orchestrator.search(&criteria, SortKey::Recommended);

        assert_eq!(results.matched, 0);
        assert!(results.listings.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_book_appends_to_both_histories() {
        let (_dir, orchestrator) = orchestrator();

        let request = BookingRequest {
            room_type: RoomType::Triple,
            checkin_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            duration_months: 6,
            students_count: 2,
        };

        let record = orchestrator.book("hv003", request, guest()).await.unwrap();
        assert_eq!(record.hostel_name, "City Central Hostel");
        assert_eq!(record.quote.total, 6500 * 6 + 5500);

        let mine = orchestrator.bookings().unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].booking_id, record.booking_id);

        let theirs = orchestrator.hostel_bookings("hv003").unwrap();
        assert_eq!(theirs.len(), 1);
        assert!(orchestrator.hostel_bookings("hv001").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_book_unknown_hostel_fails() {
        let (_dir, orchestrator) = orchestrator();

        let request = BookingRequest {
            room_type: RoomType::Double,
            checkin_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            duration_months: 3,
            students_count: 1,
        };

        assert!(orchestrator.book("hv999", request, guest()).await.is_err());
        assert!(orchestrator.bookings().unwrap().is_empty());
    }

    #[test]
    fn test_wishlist_roundtrip() {
        let (_dir, orchestrator) = orchestrator();

        assert!(orchestrator.toggle_wishlist("hv001").unwrap());
        assert!(orchestrator.toggle_wishlist("hv005").unwrap());
        assert!(!orchestrator.toggle_wishlist("hv001").unwrap());

        let saved = orchestrator.wishlist().unwrap();
        let ids: Vec<&str> = saved.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["hv005"]);

        assert!(orchestrator.toggle_wishlist("hv999").is_err());
    }
}
