//! Wishlist persistence.
//!
//! A deduplicated list of hostel ids under the `wishlist` key, with the
//! heart-button's toggle semantics.

use crate::error::Result;
use crate::store::Store;

const WISHLIST_KEY: &str = "wishlist";

/// Wishlist operations over a store.
pub struct Wishlist<'a> {
    store: &'a Store,
}

impl<'a> Wishlist<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Saved hostel ids, in the order they were added
    pub fn ids(&self) -> Result<Vec<String>> {
        Ok(self.store.get(WISHLIST_KEY)?.unwrap_or_default())
    }

    pub fn contains(&self, hostel_id: &str) -> Result<bool> {
        Ok(self.ids()?.iter().any(|id| id == hostel_id))
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.ids()?.len())
    }

    /// Add an id; already-saved ids are left alone.
    pub fn add(&self, hostel_id: &str) -> Result<()> {
        let mut ids = self.ids()?;
        if !ids.iter().any(|id| id == hostel_id) {
            ids.push(hostel_id.to_string());
            self.store.set(WISHLIST_KEY, &ids)?;
        }
        Ok(())
    }

    pub fn remove(&self, hostel_id: &str) -> Result<()> {
        let mut ids = self.ids()?;
        ids.retain(|id| id != hostel_id);
        self.store.set(WISHLIST_KEY, &ids)?;
        Ok(())
    }

    /// Flip an id's saved state; returns true when the id is now saved.
    pub fn toggle(&self, hostel_id: &str) -> Result<bool> {
        if self.contains(hostel_id)? {
            self.remove(hostel_id)?;
            Ok(false)
        } else {
            self.add(hostel_id)?;
            Ok(true)
        }
    }
}
