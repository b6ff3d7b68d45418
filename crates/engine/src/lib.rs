//! # Engine Crate
//!
//! Wires the pure search pipeline to its collaborators: the catalog it
//! reads, the store it remembers things in, and the booking flow. The
//! async boundary lives here; the pipeline underneath stays synchronous.

pub mod orchestrator;

pub use orchestrator::{SavedSearch, SearchOrchestrator, SearchResults};
