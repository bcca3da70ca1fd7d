//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{GenreFilter, VoteCountFilter, YearRangeFilter};
use crate::state::FilterState;
use crate::traits::Filter;
use catalog::MovieSummary;

/// Chains multiple filters together into a processing pipeline.
///
/// A record survives the pipeline only if every filter accepts it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(selected))
///     .add_filter(VoteCountFilter::new(100));
///
/// let filtered = pipeline.apply(raw.iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline a FilterState describes.
    ///
    /// Filters that would accept every record are left out: an empty
    /// genre selection, a trivial year range, and a zero vote threshold.
    pub fn from_state(state: &FilterState, current_year: i32) -> Self {
        let mut pipeline = Self::new();
        if !state.selected_genres.is_empty() {
            pipeline = pipeline.add_filter(GenreFilter::new(state.selected_genres.clone()));
        }
        if !state.year_range.is_trivial(current_year) {
            pipeline = pipeline.add_filter(YearRangeFilter::new(state.year_range));
        }
        if state.min_vote_count > 0 {
            pipeline = pipeline.add_filter(VoteCountFilter::new(state.min_vote_count));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    ///
    /// ## Algorithm
    /// 1. Start with the input records
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the surviving records, still in input order
    pub fn apply<'a>(&self, movies: Vec<&'a MovieSummary>) -> Vec<&'a MovieSummary> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn create_test_movies() -> Vec<MovieSummary> {
        vec![
            MovieSummary {
                id: 1,
                release_date: Some("1999-03-31".to_string()),
                vote_count: 25000,
                genre_ids: BTreeSet::from([28, 878]),
                ..Default::default()
            },
            MovieSummary {
                id: 2,
                release_date: Some("2021-12-22".to_string()),
                vote_count: 40,
                genre_ids: BTreeSet::from([878]),
                ..Default::default()
            },
            MovieSummary {
                id: 3,
                release_date: None,
                vote_count: 900,
                genre_ids: BTreeSet::from([18]),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let movies = create_test_movies();
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_single_filter() {
        let movies = create_test_movies();
        let pipeline = FilterPipeline::new().add_filter(VoteCountFilter::new(100));

        let filtered = pipeline.apply(movies.iter().collect());
        let ids: Vec<_> = filtered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filters_are_anded() {
        let movies = create_test_movies();
        let pipeline = FilterPipeline::new()
            .add_filter(GenreFilter::new(BTreeSet::from([878])))
            .add_filter(VoteCountFilter::new(100));

        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_from_default_state_is_empty() {
        let pipeline = FilterPipeline::from_state(&FilterState::new(2026), 2026);
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_from_state_adds_active_filters() {
        let mut state = FilterState::new(2026);
        state.toggle_genre(18);
        state.set_year_range(1990, 2026).unwrap();
        state.min_vote_count = 10;

        let pipeline = FilterPipeline::from_state(&state, 2026);
        assert_eq!(pipeline.len(), 3);
    }
}
