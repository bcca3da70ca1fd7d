//! Filter to keep only movies in one of the selected genres.

use crate::traits::Filter;
use catalog::{GenreId, MovieSummary};
use std::collections::BTreeSet;

/// Keeps records whose genres overlap the selection.
///
/// ## Algorithm
/// 1. An empty selection means "any genre": everything passes
/// 2. Otherwise a record passes if at least one of its genre ids is selected
pub struct GenreFilter {
    selected: BTreeSet<GenreId>,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `selected` - Genre ids the user picked
    pub fn new(selected: BTreeSet<GenreId>) -> Self {
        Self { selected }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn accepts(&self, movie: &MovieSummary) -> bool {
        self.selected.is_empty() || !movie.genre_ids.is_disjoint(&self.selected)
    }
}
