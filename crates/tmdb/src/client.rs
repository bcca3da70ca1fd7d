//! HTTP client for the TMDB v3 REST API.

use crate::config::TmdbConfig;
use crate::error::{ConfigError, FetchError};
use crate::source::MovieSource;
use async_trait::async_trait;
use catalog::{Genre, MovieDetails, MovieId, MovieSummary};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

const SEARCH_ENDPOINT: &str = "/search/movie";
const GENRES_ENDPOINT: &str = "/genre/movie/list";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<MovieSummary>,
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

/// Client for the TMDB v3 API.
///
/// Wraps a `reqwest::Client` configured with the request timeout and
/// authenticates every call with the `api_key` query parameter.
///
/// ```ignore
/// let config = TmdbConfig::from_env()?;
/// let client = TmdbClient::new(config)?;
/// let movies = client.search("the matrix").await?;
/// ```
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    config: TmdbConfig,
}

impl TmdbClient {
    /// Build a client from an explicit configuration.
    pub fn new(config: TmdbConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }

    /// Issue one GET request and decode the JSON body.
    ///
    /// ## Algorithm
    /// 1. Append `api_key` (and `language` when configured) to `params`
    /// 2. Send the request; transport failures become `FetchError::Transport`
    ///    with the URL stripped from the underlying error
    /// 3. Any non-2xx status becomes `FetchError::Status`
    /// 4. Decode the body; shape mismatches become `FetchError::Decode`
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let mut query = vec![("api_key", self.config.api_key())];
        if let Some(language) = self.config.language() {
            query.push(("language", language));
        }
        query.extend_from_slice(params);

        debug!(endpoint, "Sending TMDB request");
        let response = self
            .http
            .get(self.config.endpoint_url(endpoint))
            .query(&query)
            .send()
            .await
            .map_err(|source| {
                // The request URL carries the api_key
                let source = source.without_url();
                warn!(endpoint, error = %source, "TMDB request failed");
                FetchError::Transport {
                    endpoint: endpoint.to_string(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "TMDB returned an error status");
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.to_string(),
                source: source.without_url(),
            })?;

        serde_json::from_slice(&body).map_err(|source| {
            warn!(endpoint, error = %source, "TMDB response could not be decoded");
            FetchError::Decode {
                endpoint: endpoint.to_string(),
                source,
            }
        })
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn search(&self, text: &str) -> Result<Vec<MovieSummary>, FetchError> {
        info!(query = text, "Searching movies");
        let response: SearchResponse = self
            .get_json(SEARCH_ENDPOINT, &[("query", text)])
            .await?;
        info!(count = response.results.len(), "Search returned results");
        Ok(response.results)
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>, FetchError> {
        let response: GenreListResponse = self.get_json(GENRES_ENDPOINT, &[]).await?;
        info!(count = response.genres.len(), "Loaded genre list");
        Ok(response.genres)
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails, FetchError> {
        let endpoint = format!("/movie/{id}");
        let details: MovieDetails = self.get_json(&endpoint, &[]).await?;
        info!(id, title = %details.title, "Loaded movie details");
        Ok(details)
    }
}
