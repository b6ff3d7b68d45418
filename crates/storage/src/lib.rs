//! # Storage Crate
//!
//! The persistence bridge: a JSON-file-backed key-value store standing in
//! for browser local storage, plus the two flows built directly on it
//! (wishlist, demo accounts).
//!
//! ## Main Components
//!
//! - **store**: `Store` — one JSON document per key under a root directory
//! - **wishlist**: saved hostel ids with toggle semantics
//! - **accounts**: demo registration/login/session
//! - **error**: Error types
//!
//! The search pipeline has no dependency on this crate; callers use it to
//! remember last-used criteria, wishlists, and booking history across runs.

pub mod accounts;
pub mod error;
pub mod store;
pub mod wishlist;

// Re-export commonly used types
pub use accounts::{Accounts, RegistrationForm, Role, Session, UserAccount};
pub use error::{Result, StorageError};
pub use store::Store;
pub use wishlist::Wishlist;
