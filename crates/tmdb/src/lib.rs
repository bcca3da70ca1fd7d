//! TMDB client for searching movies and fetching reference data.
//!
//! This crate provides a Rust client for the TMDB v3 REST API. It handles:
//! - Explicit configuration (API key, base URL, language, timeout)
//! - Title search, genre list and single-title detail lookups
//! - Classifying failures as transport, HTTP status or decode errors
//!
//! Nothing here retries or caches: each lookup is exactly one request.

pub mod client;
pub mod config;
pub mod error;
pub mod source;

pub use client::TmdbClient;
pub use config::{DEFAULT_BASE_URL, TmdbConfig};
pub use error::{ConfigError, FetchError};
pub use source::MovieSource;
