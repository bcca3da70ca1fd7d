//! Error types for the pipeline crate.
//!
//! Applying filters never fails. These errors only come from building or
//! editing a FilterState with values that would break its invariants.

use thiserror::Error;

/// Errors raised when constructing or editing filter state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A year range whose lower bound is after its upper bound
    #[error("Invalid year range: {min} is after {max}")]
    InvalidYearRange { min: i32, max: i32 },

    /// A sort key name that doesn't match any SortKey
    #[error(
        "Unknown sort key: {0} (expected relevance, release-date-asc, release-date-desc or rating-desc)"
    )]
    UnknownSortKey(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
