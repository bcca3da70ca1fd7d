//! Error types for the TMDB client.

use thiserror::Error;

/// A failed remote lookup.
///
/// Every variant names the endpoint path (never the full URL, which
/// carries the API key).
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout)
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success HTTP status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    /// The body wasn't the JSON shape we expected
    #[error("Invalid response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The endpoint path the failed request targeted
    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::Transport { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Errors building a client configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No TMDB API key configured (set TMDB_API_KEY)")]
    MissingApiKey,

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
