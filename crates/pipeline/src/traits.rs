//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to a result set.

use catalog::MovieSummary;

/// Core trait for filtering search results.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - Filters never fail: a record either passes or it doesn't
/// - `apply` works on borrowed records, so the raw list is never copied
///   or altered and every survivor still points into it
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single record passes this filter.
    fn accepts(&self, movie: &MovieSummary) -> bool;

    /// Keep the records that pass, in their original order.
    fn apply<'a>(&self, movies: Vec<&'a MovieSummary>) -> Vec<&'a MovieSummary> {
        movies
            .into_iter()
            .filter(|movie| self.accepts(movie))
            .collect()
    }
}
