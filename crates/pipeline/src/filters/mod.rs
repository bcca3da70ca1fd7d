//! Filter implementations for the result pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;
pub mod vote_count;
pub mod year_range;

// Re-export for convenience
pub use genre::GenreFilter;
pub use vote_count::VoteCountFilter;
pub use year_range::YearRangeFilter;
