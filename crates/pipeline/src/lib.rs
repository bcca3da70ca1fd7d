//! Filtering and sorting of movie search results.
//!
//! This crate provides:
//! - FilterState, the user's constraints and sort preference
//! - Filter trait and implementations for result filtering
//! - FilterPipeline for composing filters
//! - `apply`, the pure (raw list, filter state) -> derived list function
//!
//! ## Architecture
//! A derived list is built in two stages:
//! 1. Filters remove records outside the selection (genre, year range, vote count)
//! 2. The survivors are stable-sorted by the selected SortKey
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterState, SortKey};
//!
//! let mut filters = FilterState::default();
//! filters.toggle_genre(878);
//! filters.sort_key = SortKey::RatingDesc;
//!
//! let derived = pipeline::apply(&raw, &filters);
//! ```

pub mod engine;
pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod sort;
pub mod state;
pub mod traits;

// Re-export main types
pub use engine::{apply, apply_at};
pub use error::{FilterError, Result};
pub use filter_pipeline::FilterPipeline;
pub use state::{FilterState, SortKey, YearRange};
pub use traits::Filter;
