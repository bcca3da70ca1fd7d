//! Client configuration.
//!
//! The client never reads process state itself: a [`TmdbConfig`] is built
//! explicitly and handed to [`crate::TmdbClient::new`]. [`TmdbConfig::from_env`]
//! is a convenience for binaries.

use crate::error::ConfigError;
use reqwest::Url;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "TMDB_API_KEY";
/// Environment variable overriding the base URL
pub const BASE_URL_VAR: &str = "TMDB_BASE_URL";

/// Connection settings for the TMDB v3 API.
#[derive(Clone)]
pub struct TmdbConfig {
    api_key: String,
    base_url: String,
    language: Option<String>,
    timeout: Duration,
}

impl TmdbConfig {
    /// Configuration for the public endpoint with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            language: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Point the client at a different endpoint root.
    ///
    /// The URL must be absolute http(s). A trailing `/` is dropped so
    /// endpoint paths can be appended directly.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url,
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// ISO-639-1 language tag sent with every request (e.g. `pt-BR`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `TMDB_API_KEY` and, if set, `TMDB_BASE_URL` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;
        let config = Self::new(api_key)?;
        match lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            Some(url) => config.with_base_url(url),
            None => Ok(config),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for an endpoint path such as `/search/movie`.
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// Keep the key out of logs and panic messages
impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("timeout", &self.timeout)
            .finish()
    }
}
