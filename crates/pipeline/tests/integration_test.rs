//! Integration tests for the pipeline.
//!
//! These tests drive `apply` end to end with realistic search pages and
//! check the properties a derived list must always have.

use catalog::{GenreId, MovieSummary};
use pipeline::{FilterState, SortKey, apply, apply_at};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::ptr;

const YEAR: i32 = 2026;

fn movie(id: u32, release_date: Option<&str>, vote_average: f64, genres: &[GenreId]) -> MovieSummary {
    MovieSummary {
        id,
        title: format!("Movie {id}"),
        release_date: release_date.map(str::to_string),
        vote_average,
        vote_count: id * 10,
        original_language: "en".to_string(),
        genre_ids: genres.iter().copied().collect(),
        ..Default::default()
    }
}

fn create_test_page() -> Vec<MovieSummary> {
    vec![
        movie(1, Some("1994-09-23"), 8.7, &[18, 80]),
        movie(2, Some("2020-01-01"), 6.4, &[28]),
        movie(3, None, 0.0, &[]),
        movie(4, Some("2031-06-01"), 0.0, &[878]),
        movie(5, Some("2008-07-16"), 8.5, &[28, 80, 18]),
        movie(6, Some("not a date"), 5.0, &[35]),
    ]
}

fn ids(movies: &[&MovieSummary]) -> Vec<u32> {
    movies.iter().map(|m| m.id).collect()
}

#[test]
fn test_determinism() {
    let raw = create_test_page();
    let mut filters = FilterState::new(YEAR);
    filters.toggle_genre(28);
    filters.toggle_genre(18);
    filters.sort_key = SortKey::ReleaseDateDesc;

    let first = apply_at(&raw, &filters, YEAR);
    let second = apply_at(&raw, &filters, YEAR);
    assert_eq!(ids(&first), ids(&second));
    assert!(first.iter().zip(&second).all(|(a, b)| ptr::eq(*a, *b)));
}

#[test]
fn test_empty_filter_identity() {
    let raw = create_test_page();

    let derived = apply_at(&raw, &FilterState::new(YEAR), YEAR);
    assert_eq!(derived.len(), raw.len());
    assert!(derived.iter().zip(&raw).all(|(d, r)| ptr::eq(*d, r)));
}

#[test]
fn test_default_state_with_real_clock_is_identity() {
    let raw = create_test_page();

    let derived = apply(&raw, &FilterState::default());
    assert_eq!(ids(&derived), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_genre_filter_scenario() {
    let raw = vec![movie(1, Some("2001-01-01"), 5.0, &[1, 2]), movie(2, Some("2001-01-01"), 5.0, &[3])];
    let mut filters = FilterState::new(YEAR);
    filters.selected_genres = BTreeSet::from([1]);

    let derived = apply_at(&raw, &filters, YEAR);
    assert_eq!(ids(&derived), vec![1]);
}

#[test]
fn test_year_filter_scenario() {
    let raw = vec![movie(1, Some("1994-09-23"), 5.0, &[]), movie(2, Some("2020-01-01"), 5.0, &[])];
    let mut filters = FilterState::new(YEAR);
    filters.set_year_range(2000, 2025).unwrap();

    let derived = apply_at(&raw, &filters, YEAR);
    assert_eq!(ids(&derived), vec![2]);
}

#[test]
fn test_rating_sort_scenario() {
    let raw = vec![
        movie(1, Some("2001-01-01"), 7.0, &[]), // A
        movie(2, Some("2001-01-01"), 8.5, &[]), // B
        movie(3, Some("2001-01-01"), 8.5, &[]), // C
    ];
    let mut filters = FilterState::new(YEAR);
    filters.sort_key = SortKey::RatingDesc;

    let derived = apply_at(&raw, &filters, YEAR);
    assert_eq!(ids(&derived), vec![2, 3, 1]);
}

#[test]
fn test_missing_release_date_scenario() {
    let raw = create_test_page();

    // Excluded as soon as the range is narrower than the default window
    let mut filters = FilterState::new(YEAR);
    filters.set_year_range(1950, YEAR).unwrap();
    let derived = apply_at(&raw, &filters, YEAR);
    assert!(!ids(&derived).contains(&3));
    assert!(!ids(&derived).contains(&6));

    // Sorts as the earliest date
    let mut filters = FilterState::new(YEAR);
    filters.sort_key = SortKey::ReleaseDateAsc;
    let derived = apply_at(&raw, &filters, YEAR);
    assert_eq!(ids(&derived), vec![3, 6, 1, 5, 2, 4]);
}

#[test]
fn test_combined_filters_and_sort() {
    let raw = create_test_page();
    let mut filters = FilterState::new(YEAR);
    filters.toggle_genre(80);
    filters.toggle_genre(28);
    filters.set_year_range(1990, 2025).unwrap();
    filters.min_vote_count = 20;
    filters.sort_key = SortKey::ReleaseDateAsc;

    let derived = apply_at(&raw, &filters, YEAR);
    assert_eq!(ids(&derived), vec![5, 2]);
}

// =============================================================================
// Properties
// =============================================================================

fn arb_movie() -> impl Strategy<Value = MovieSummary> {
    let dates = prop_oneof![
        Just(None),
        Just(Some("".to_string())),
        Just(Some("TBA".to_string())),
        (1890i32..2035, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| Some(format!("{y:04}-{m:02}-{d:02}"))),
    ];
    (
        1u32..10_000,
        dates,
        0.0f64..10.0,
        0u32..5_000,
        prop::collection::btree_set(1u32..8, 0..4),
    )
        .prop_map(|(id, release_date, vote_average, vote_count, genre_ids)| MovieSummary {
            id,
            title: format!("Movie {id}"),
            release_date,
            vote_average,
            vote_count,
            genre_ids,
            ..Default::default()
        })
}

fn arb_filters() -> impl Strategy<Value = FilterState> {
    let sort_keys = prop_oneof![
        Just(SortKey::Relevance),
        Just(SortKey::ReleaseDateAsc),
        Just(SortKey::ReleaseDateDesc),
        Just(SortKey::RatingDesc),
    ];
    (
        prop::collection::btree_set(1u32..8, 0..3),
        1880i32..2040,
        0i32..60,
        prop_oneof![Just(0u32), 0u32..3_000],
        sort_keys,
    )
        .prop_map(|(selected_genres, min, span, min_vote_count, sort_key)| {
            let mut filters = FilterState::new(YEAR);
            filters.selected_genres = selected_genres;
            filters.set_year_range(min, min + span).unwrap();
            filters.min_vote_count = min_vote_count;
            filters.sort_key = sort_key;
            filters
        })
}

proptest! {
    #[test]
    fn prop_apply_is_deterministic(
        raw in prop::collection::vec(arb_movie(), 0..25),
        filters in arb_filters(),
    ) {
        let first = apply_at(&raw, &filters, YEAR);
        let second = apply_at(&raw, &filters, YEAR);
        prop_assert_eq!(first.len(), second.len());
        prop_assert!(first.iter().zip(&second).all(|(a, b)| ptr::eq(*a, *b)));
    }

    #[test]
    fn prop_derived_is_subset_without_duplicates(
        raw in prop::collection::vec(arb_movie(), 0..25),
        filters in arb_filters(),
    ) {
        let derived = apply_at(&raw, &filters, YEAR);
        prop_assert!(derived.len() <= raw.len());
        for (i, movie) in derived.iter().enumerate() {
            prop_assert!(raw.iter().any(|r| ptr::eq(r, *movie)));
            prop_assert!(derived[i + 1..].iter().all(|other| !ptr::eq(*other, *movie)));
        }
    }

    #[test]
    fn prop_every_survivor_passes_every_predicate(
        raw in prop::collection::vec(arb_movie(), 0..25),
        filters in arb_filters(),
    ) {
        let constrains_years = !filters.year_range.is_trivial(YEAR);
        for movie in apply_at(&raw, &filters, YEAR) {
            prop_assert!(movie.vote_count >= filters.min_vote_count);
            prop_assert!(
                filters.selected_genres.is_empty()
                    || !movie.genre_ids.is_disjoint(&filters.selected_genres)
            );
            if constrains_years {
                let year = movie.release_year();
                prop_assert!(year.is_some_and(|y| filters.year_range.contains(y)));
            }
        }
    }
}
