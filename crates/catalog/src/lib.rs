//! # Catalog Crate
//!
//! Data model for movie search results fetched from TMDB.
//!
//! ## Main Components
//!
//! - **types**: Wire-compatible records (MovieSummary, MovieDetails, Genre)
//! - **release**: Release date parsing and year extraction
//! - **index**: GenreIndex for id/name lookups
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{GenreIndex, MovieSummary};
//!
//! let movie: MovieSummary = serde_json::from_str(body)?;
//! let genres = GenreIndex::from_genres(fetched_genres);
//!
//! println!("{} ({:?}) {:?}", movie.title, movie.release_year(), genres.names_for(&movie.genre_ids));
//! ```

// Public modules
pub mod types;
pub mod release;
pub mod index;

// Re-export commonly used types for convenience
pub use index::GenreIndex;
pub use release::{
    EARLIEST_RELEASE_YEAR, current_year, parse_release_date, release_sort_date, release_year,
};
pub use types::{
    // Type aliases
    GenreId,
    MovieId,
    // Core types
    Genre,
    MovieDetails,
    MovieSummary,
    ProductionCountry,
};
