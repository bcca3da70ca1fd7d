//! Filter state owned by a search session.
//!
//! A FilterState is the complete set of user-chosen constraints plus the
//! sort preference for one derived list. It is only ever changed by
//! explicit user actions.

use crate::error::{FilterError, Result};
use catalog::{EARLIEST_RELEASE_YEAR, GenreId, current_year};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Year range
// =============================================================================

/// Inclusive range of release years.
///
/// Invariant: `min <= max`. The fields are private so the only way to
/// build one is through [`YearRange::new`] or [`YearRange::full`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Create a year range, rejecting `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(FilterError::InvalidYearRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// The default window: `[1900, current_year]`.
    pub fn full(current_year: i32) -> Self {
        Self {
            min: EARLIEST_RELEASE_YEAR,
            max: current_year.max(EARLIEST_RELEASE_YEAR),
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// A range is trivial when it covers the whole default window.
    ///
    /// Trivial ranges don't constrain results at all, so records without a
    /// release date are only dropped once the user narrows the range.
    pub fn is_trivial(&self, current_year: i32) -> bool {
        self.min <= EARLIEST_RELEASE_YEAR && self.max >= current_year
    }
}

// =============================================================================
// Sort key
// =============================================================================

/// Ordering applied to the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Keep the order the search returned
    #[default]
    Relevance,
    ReleaseDateAsc,
    ReleaseDateDesc,
    RatingDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::ReleaseDateAsc,
        SortKey::ReleaseDateDesc,
        SortKey::RatingDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::ReleaseDateAsc => "release-date-asc",
            SortKey::ReleaseDateDesc => "release-date-desc",
            SortKey::RatingDesc => "rating-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| FilterError::UnknownSortKey(s.to_string()))
    }
}

// =============================================================================
// Filter state
// =============================================================================

/// User-selected constraints and sort preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Genre ids to match; empty means "any genre"
    pub selected_genres: BTreeSet<GenreId>,
    pub year_range: YearRange,
    pub min_vote_count: u32,
    pub sort_key: SortKey,
}

impl FilterState {
    /// Default state for a given current year: `{∅, [1900, current_year], 0, relevance}`.
    pub fn new(current_year: i32) -> Self {
        Self {
            selected_genres: BTreeSet::new(),
            year_range: YearRange::full(current_year),
            min_vote_count: 0,
            sort_key: SortKey::Relevance,
        }
    }

    /// Add the genre if it isn't selected, remove it if it is.
    ///
    /// Returns whether the genre is selected afterwards.
    pub fn toggle_genre(&mut self, genre: GenreId) -> bool {
        if self.selected_genres.remove(&genre) {
            false
        } else {
            self.selected_genres.insert(genre);
            true
        }
    }

    /// Replace the year range, keeping the old one if the new bounds are invalid.
    pub fn set_year_range(&mut self, min: i32, max: i32) -> Result<()> {
        self.year_range = YearRange::new(min, max)?;
        Ok(())
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(current_year())
    }
}
