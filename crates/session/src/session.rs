//! # Search Session
//!
//! This module is the thin event layer between the user and the core:
//! 1. A submitted query triggers one remote search
//! 2. The raw result list is kept as-is for the lifetime of that search
//! 3. Filter edits change the FilterState only; nothing is re-fetched
//! 4. Every view is derived on demand with `pipeline::apply`
//!
//! Failed lookups never reach the filter engine. A failed search leaves
//! an empty raw list behind and a message for the presenter.

use std::time::Instant;

use catalog::{GenreId, GenreIndex, MovieDetails, MovieId, MovieSummary};
use pipeline::{FilterState, SortKey};
use tmdb::MovieSource;
use tracing::{info, warn};

use crate::error::SessionError;

/// What the last search produced
#[derive(Debug)]
enum SearchOutcome {
    NotSearched,
    Loaded,
    Failed(SessionError),
}

/// What the presenter should show for the current state.
#[derive(Debug)]
pub enum SessionView<'a> {
    /// No query submitted yet
    NotSearched,
    /// The last search failed; Display gives the user-facing message
    Failed(&'a SessionError),
    /// The search itself came back empty
    NoResults,
    /// The search found titles, but the filters hide all of them
    NoMatches { hidden: usize },
    /// The derived list, in display order
    Results(Vec<&'a MovieSummary>),
}

/// One interactive search session.
///
/// Owns the raw results, the genre reference list and the FilterState.
/// It is driven by one task at a time, so none of it needs locking.
pub struct SearchSession<S> {
    source: S,
    filters: FilterState,
    genres: GenreIndex,
    raw: Vec<MovieSummary>,
    last_query: Option<String>,
    outcome: SearchOutcome,
}

impl<S: MovieSource> SearchSession<S> {
    /// Create a session with the default filter state
    pub fn new(source: S) -> Self {
        Self::with_filters(source, FilterState::default())
    }

    /// Create a session starting from a given filter state
    pub fn with_filters(source: S, filters: FilterState) -> Self {
        Self {
            source,
            filters,
            genres: GenreIndex::new(),
            raw: Vec::new(),
            last_query: None,
            outcome: SearchOutcome::NotSearched,
        }
    }

    /// Fetch the genre reference list.
    ///
    /// A failure is logged and leaves the index empty.
    pub async fn load_genres(&mut self) -> &GenreIndex {
        match self.source.fetch_genres().await {
            Ok(genres) => {
                self.genres = GenreIndex::from_genres(genres);
                info!("Loaded {} genres", self.genres.len());
            }
            Err(e) => {
                warn!("Failed to load genre list: {}", e);
                self.genres = GenreIndex::new();
            }
        }
        &self.genres
    }

    /// Run a search for `text`.
    ///
    /// Blank input is ignored and returns `false`. Otherwise the previous
    /// results are replaced, by an empty list if the lookup fails.
    pub async fn submit(&mut self, text: &str) -> bool {
        let query = text.trim();
        if query.is_empty() {
            return false;
        }

        let start_time = Instant::now();
        self.last_query = Some(query.to_string());

        match self.source.search(query).await {
            Ok(results) => {
                info!(
                    "Search for '{}' returned {} results in {:.2?}",
                    query,
                    results.len(),
                    start_time.elapsed()
                );
                self.raw = results;
                self.outcome = SearchOutcome::Loaded;
            }
            Err(e) => {
                warn!("Search for '{}' failed: {}", query, e);
                self.raw = Vec::new();
                self.outcome = SearchOutcome::Failed(SessionError::Search(e));
            }
        }
        true
    }

    /// Fetch the full record for one title.
    pub async fn details(&self, id: MovieId) -> Result<MovieDetails, SessionError> {
        self.source.movie_details(id).await.map_err(|source| {
            warn!("Detail lookup for movie {} failed: {}", id, source);
            SessionError::Details { id, source }
        })
    }

    // Filter events. None of these touch the raw list or the network.

    /// Select or deselect a genre; returns whether it is now selected
    pub fn toggle_genre(&mut self, genre: GenreId) -> bool {
        self.filters.toggle_genre(genre)
    }

    pub fn set_year_range(&mut self, min: i32, max: i32) -> pipeline::Result<()> {
        self.filters.set_year_range(min, max)
    }

    pub fn set_min_vote_count(&mut self, min_vote_count: u32) {
        self.filters.min_vote_count = min_vote_count;
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.filters.sort_key = sort_key;
    }

    /// Back to `{∅, [1900, current year], 0, relevance}`
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
    }

    /// The derived list for the current raw results and filters.
    pub fn results(&self) -> Vec<&MovieSummary> {
        pipeline::apply(&self.raw, &self.filters)
    }

    /// Everything the presenter needs to render the result area.
    pub fn view(&self) -> SessionView<'_> {
        match &self.outcome {
            SearchOutcome::NotSearched => SessionView::NotSearched,
            SearchOutcome::Failed(e) => SessionView::Failed(e),
            SearchOutcome::Loaded if self.raw.is_empty() => SessionView::NoResults,
            SearchOutcome::Loaded => {
                let derived = self.results();
                if derived.is_empty() {
                    SessionView::NoMatches {
                        hidden: self.raw.len(),
                    }
                } else {
                    SessionView::Results(derived)
                }
            }
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn genres(&self) -> &GenreIndex {
        &self.genres
    }

    /// The unfiltered results of the last search
    pub fn raw_results(&self) -> &[MovieSummary] {
        &self.raw
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }
}
