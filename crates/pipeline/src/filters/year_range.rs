//! Filter on release year.
//!
//! Records whose release date has no readable year are excluded. TMDB
//! leaves the date blank for unannounced titles, and a record we can't
//! place in time can't be shown as inside the user's range.

use crate::state::YearRange;
use crate::traits::Filter;
use catalog::MovieSummary;

/// Keeps records released within an inclusive year range.
///
/// ## Algorithm
/// 1. Extract the four-digit year from `release_date`
/// 2. No year: exclude the record
/// 3. Otherwise keep it if `min <= year <= max`
pub struct YearRangeFilter {
    range: YearRange,
}

impl YearRangeFilter {
    pub fn new(range: YearRange) -> Self {
        Self { range }
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn accepts(&self, movie: &MovieSummary) -> bool {
        movie
            .release_year()
            .is_some_and(|year| self.range.contains(year))
    }
}
