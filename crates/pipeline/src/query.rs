//! The query entry point: filter, then sort.

use catalog::{Catalog, Hostel};

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::sort::{SortKey, sort_listings};

/// Run a full query against a catalog.
///
/// A pure function of its three inputs: one filtering pass over the
/// catalog, then one stable sort of the survivors. Zero matches is a
/// normal outcome, returned as an empty vec for the caller to render as a
/// "no results" state. The two stages stay independently callable as
/// `FilterPipeline::apply` and `sort_listings`.
pub fn search<'a>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<&'a Hostel> {
    let listings: Vec<&Hostel> = catalog.hostels().iter().collect();
    let matched = FilterPipeline::standard().apply(listings, criteria);
    sort_listings(matched, sort)
}
