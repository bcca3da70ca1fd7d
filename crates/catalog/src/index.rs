//! Genre lookup built from the reference genre list.
//!
//! Search results only carry genre ids, so anything that shows genre
//! names, or accepts them as user input, goes through a [`GenreIndex`].

use crate::types::{Genre, GenreId};
use std::collections::{BTreeSet, HashMap};

/// Read-only id/name lookup over the session's genre list.
///
/// Keeps the list in the order the API returned it, plus a HashMap
/// for O(1) id lookups.
#[derive(Debug, Clone, Default)]
pub struct GenreIndex {
    genres: Vec<Genre>,
    by_id: HashMap<GenreId, usize>,
}

impl GenreIndex {
    /// Creates a new, empty GenreIndex
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a fetched genre list.
    ///
    /// If the same id appears twice, the first name wins.
    pub fn from_genres(genres: impl IntoIterator<Item = Genre>) -> Self {
        let mut index = Self::new();
        for genre in genres {
            index.insert(genre);
        }
        index
    }

    /// Insert a genre unless its id is already known
    pub fn insert(&mut self, genre: Genre) {
        if self.by_id.contains_key(&genre.id) {
            return;
        }
        self.by_id.insert(genre.id, self.genres.len());
        self.genres.push(genre);
    }

    /// Get a genre name by id
    pub fn name(&self, id: GenreId) -> Option<&str> {
        self.by_id
            .get(&id)
            .map(|&pos| self.genres[pos].name.as_str())
    }

    /// Names for a set of genre ids, skipping ids the index doesn't know.
    pub fn names_for(&self, ids: &BTreeSet<GenreId>) -> Vec<&str> {
        ids.iter().filter_map(|&id| self.name(id)).collect()
    }

    /// Resolve user input to a genre id.
    ///
    /// Accepts either a numeric id present in the index or a genre name
    /// (case-insensitive, surrounding whitespace ignored).
    pub fn resolve(&self, input: &str) -> Option<GenreId> {
        let input = input.trim();
        if let Ok(id) = input.parse::<GenreId>() {
            return self.by_id.contains_key(&id).then_some(id);
        }
        self.genres
            .iter()
            .find(|genre| genre.name.eq_ignore_ascii_case(input))
            .map(|genre| genre.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Genre> {
        self.genres.iter()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }
}
