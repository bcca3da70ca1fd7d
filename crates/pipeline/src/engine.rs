//! Filter/sort entry points.
//!
//! `apply` is a pure function of (raw list, filter state): it never touches
//! the raw list, and each call builds a fresh derived list that borrows
//! from it. Calling it twice with the same arguments gives the same
//! sequence.

use crate::filter_pipeline::FilterPipeline;
use crate::sort::sort_movies;
use crate::state::FilterState;
use catalog::{MovieSummary, current_year};

/// Derive the display list from a raw search result.
///
/// Uses the local calendar year to decide whether the year range is the
/// default window. See [`apply_at`] for the clock-free version.
pub fn apply<'a>(raw: &'a [MovieSummary], filters: &FilterState) -> Vec<&'a MovieSummary> {
    apply_at(raw, filters, current_year())
}

/// Derive the display list, given the current year explicitly.
///
/// ## Algorithm
/// 1. Build a FilterPipeline from the active constraints
/// 2. Run every record of `raw` through it, keeping relevance order
/// 3. Stable-sort the survivors by `filters.sort_key`
pub fn apply_at<'a>(
    raw: &'a [MovieSummary],
    filters: &FilterState,
    current_year: i32,
) -> Vec<&'a MovieSummary> {
    let pipeline = FilterPipeline::from_state(filters, current_year);
    let mut derived = pipeline.apply(raw.iter().collect());
    sort_movies(&mut derived, filters.sort_key);

    tracing::debug!(
        raw = raw.len(),
        derived = derived.len(),
        sort = %filters.sort_key,
        "Derived result list"
    );
    derived
}
