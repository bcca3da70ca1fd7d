//! Core domain types for TMDB movie data.
//!
//! Field names match the TMDB v3 JSON schema, so every type here can be
//! decoded straight from an API response body. Decoding is lenient: the
//! live API routinely omits fields or sends `null`, and a record with
//! partial metadata is still a record.

use crate::release;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Type Aliases
// =============================================================================

/// TMDB movie identifier
pub type MovieId = u32;

/// TMDB genre identifier (e.g. 28 = Action, 18 = Drama)
pub type GenreId = u32;

// =============================================================================
// Lenient field decoding
// =============================================================================

/// Decode a field, falling back to `T::default()` when the value is
/// `null` or has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Like [`lenient`] for optional strings, but a blank string counts as absent.
///
/// TMDB sends `"release_date": ""` for unreleased titles.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = lenient(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

// =============================================================================
// Movie-related Types
// =============================================================================

/// One entry of a search result page.
///
/// Immutable once fetched; lives as long as the result set it came from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(default, deserialize_with = "lenient")]
    pub id: MovieId,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub poster_path: Option<String>,
    /// ISO date string (`YYYY-MM-DD`) as sent by the API
    #[serde(default, deserialize_with = "lenient_text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub vote_count: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub original_language: String,
    #[serde(default, deserialize_with = "lenient")]
    pub overview: String,
    #[serde(default, deserialize_with = "lenient")]
    pub genre_ids: BTreeSet<GenreId>,
}

impl MovieSummary {
    /// Four-digit release year, if the release date carries one.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.as_deref().and_then(release::release_year)
    }

    /// Full release date, if it parses as `YYYY-MM-DD`.
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        self.release_date.as_deref().and_then(release::parse_release_date)
    }

    /// Release date for ordering; a year-only value counts as January 1.
    pub fn release_sort_date(&self) -> Option<NaiveDate> {
        self.release_date.as_deref().and_then(release::release_sort_date)
    }
}

/// A genre from the reference list (`/genre/movie/list`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default, deserialize_with = "lenient")]
    pub id: GenreId,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

/// A production country attached to a detail record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductionCountry {
    #[serde(default, deserialize_with = "lenient")]
    pub iso_3166_1: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

/// Full record for a single title (`/movie/{id}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(default, deserialize_with = "lenient")]
    pub id: MovieId,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub overview: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub vote_count: u32,
    #[serde(default, deserialize_with = "lenient_text")]
    pub poster_path: Option<String>,
    /// Runtime in minutes; `None` or zero when unknown
    #[serde(default, deserialize_with = "lenient")]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub original_language: String,
    #[serde(default, deserialize_with = "lenient")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "lenient")]
    pub production_countries: Vec<ProductionCountry>,
    /// USD, zero when unknown
    #[serde(default, deserialize_with = "lenient")]
    pub budget: u64,
    /// USD, zero when unknown
    #[serde(default, deserialize_with = "lenient")]
    pub revenue: u64,
}

impl MovieDetails {
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        self.release_date.as_deref().and_then(release::parse_release_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_summary() {
        let json = r#"{
            "adult": false,
            "id": 680,
            "title": "Pulp Fiction",
            "poster_path": "/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
            "release_date": "1994-09-10",
            "vote_average": 8.5,
            "vote_count": 27000,
            "original_language": "en",
            "overview": "A burger-loving hit man...",
            "genre_ids": [53, 80]
        }"#;

        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 680);
        assert_eq!(movie.title, "Pulp Fiction");
        assert_eq!(movie.release_year(), Some(1994));
        assert_eq!(movie.vote_count, 27000);
        assert_eq!(movie.genre_ids, BTreeSet::from([53, 80]));
    }

    #[test]
    fn test_decode_sparse_summary_uses_defaults() {
        let json = r#"{
            "id": 12,
            "title": "Upcoming",
            "poster_path": null,
            "release_date": "",
            "overview": null
        }"#;

        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.release_year(), None);
        assert_eq!(movie.vote_average, 0.0);
        assert_eq!(movie.vote_count, 0);
        assert!(movie.overview.is_empty());
        assert!(movie.genre_ids.is_empty());
    }

    #[test]
    fn test_decode_wrong_typed_field_falls_back() {
        let json = r#"{"id": 3, "title": "Odd", "vote_count": "many", "vote_average": "high"}"#;

        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 3);
        assert_eq!(movie.vote_count, 0);
        assert_eq!(movie.vote_average, 0.0);
    }

    #[test]
    fn test_decode_details() {
        let json = r#"{
            "id": 550,
            "title": "Fight Club",
            "tagline": "Mischief. Mayhem. Soap.",
            "overview": "A ticking-time-bomb insomniac...",
            "release_date": "1999-10-15",
            "vote_average": 8.4,
            "vote_count": 26280,
            "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
            "runtime": 139,
            "original_language": "en",
            "genres": [{"id": 18, "name": "Drama"}],
            "production_countries": [
                {"iso_3166_1": "DE", "name": "Germany"},
                {"iso_3166_1": "US", "name": "United States of America"}
            ],
            "budget": 63000000,
            "revenue": 100853753
        }"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.runtime, Some(139));
        assert_eq!(details.genres[0].name, "Drama");
        assert_eq!(details.production_countries.len(), 2);
        assert_eq!(details.budget, 63_000_000);
        assert_eq!(
            details.parsed_release_date(),
            NaiveDate::from_ymd_opt(1999, 10, 15)
        );
    }

    #[test]
    fn test_decode_details_blank_tagline() {
        let json = r#"{"id": 1, "title": "Quiet", "tagline": "", "runtime": null, "genres": null}"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.tagline, None);
        assert_eq!(details.runtime, None);
        assert!(details.genres.is_empty());
    }
}
