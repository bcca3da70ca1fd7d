//! The lookup interface a search session depends on.

use crate::error::FetchError;
use async_trait::async_trait;
use catalog::{Genre, MovieDetails, MovieId, MovieSummary};

/// Remote movie lookups.
///
/// Each call is a single, non-retrying request. [`crate::TmdbClient`] is
/// the production implementation; tests substitute in-memory sources.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// First page of results for a free-text title search, in the
    /// service's own relevance order.
    async fn search(&self, text: &str) -> Result<Vec<MovieSummary>, FetchError>;

    /// The reference list of movie genres.
    async fn fetch_genres(&self) -> Result<Vec<Genre>, FetchError>;

    /// Full record for one title.
    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails, FetchError>;
}
