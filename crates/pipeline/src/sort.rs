//! Ordering of the filtered list.
//!
//! Every ordering here uses a stable sort, so records with equal keys keep
//! the relative order the search returned them in.

use crate::state::SortKey;
use catalog::MovieSummary;
use std::cmp::Reverse;

/// Sort records in place by `key`.
///
/// A year-only release date sorts as January 1 of that year. Missing or
/// unparsable dates compare as the earliest possible date: first under
/// `ReleaseDateAsc`, last under `ReleaseDateDesc`.
pub fn sort_movies(movies: &mut [&MovieSummary], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::ReleaseDateAsc => movies.sort_by_cached_key(|m| m.release_sort_date()),
        SortKey::ReleaseDateDesc => {
            movies.sort_by_cached_key(|m| Reverse(m.release_sort_date()))
        }
        SortKey::RatingDesc => {
            movies.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average))
        }
    }
}
