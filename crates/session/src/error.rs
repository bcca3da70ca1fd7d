//! User-facing failures of a search session.
//!
//! The Display text of each variant is the message shown to the user;
//! the underlying FetchError stays reachable through `source()` for logs.

use catalog::MovieId;
use thiserror::Error;
use tmdb::FetchError;

#[derive(Error, Debug)]
pub enum SessionError {
    /// A title search failed
    #[error("An error occurred while fetching movies. Please try again.")]
    Search(#[source] FetchError),

    /// A single-title detail lookup failed
    #[error("An error occurred while fetching movie details. Please try again.")]
    Details {
        id: MovieId,
        #[source]
        source: FetchError,
    },
}
