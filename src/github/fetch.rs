// src/github/fetch.rs
// =============================================================================
// This module fetches the showcased user's repositories from the GitHub API.
//
// Strategy:
// - One GET to /users/{username}/repos?per_page=100&sort=updated
// - Keep only public, non-fork repositories, newest first
// - Remember the result for a few minutes so repeated views are free
//
// What this module does NOT do:
// - Retry. A failed request is reported straight back to the caller, who
//   decides whether to try again (see src/retry.rs)
// - Cache failures. Only successful fetches are stored, so the next call
//   after an error always goes to the network
// - Paginate. Only the first 100 repositories are ever requested
// =============================================================================

use reqwest::{header, Client, StatusCode};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use super::repository::{showcase, Repository};
use crate::cache::{Clock, SystemClock, TtlCache};
use crate::config::Config;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

// Everything that can go wrong while loading repositories
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub answered, but not with a 2xx status
    #[error("GitHub API error: {}", .status.as_u16())]
    Remote { status: StatusCode },

    /// The request never got an answer (DNS, connection refused, TLS, ...)
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not a list of repositories
    #[error("Unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid API base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Parsed, but has no path to append to (e.g. "mailto:...")
    #[error("API base URL cannot take a path: {0}")]
    CannotBeABase(String),
}

// Where repositories come from: the GitHub API plus an in-memory cache
//
// One RepositorySource owns one cache. Share the source (by reference or in
// an Arc) and every caller sees the same cached list.
pub struct RepositorySource {
    client: Client,
    config: Config,
    cache: TtlCache<Vec<Repository>>,
}

impl RepositorySource {
    // Creates a source that reads the real wall clock
    pub fn new(config: Config) -> Result<Self, FetchError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    // Creates a source with a custom clock (tests use a manual one)
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Transport)?;

        let cache = TtlCache::new(config.cache_ttl, clock);

        Ok(Self {
            client,
            config,
            cache,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // Returns the cached list if it is still fresh
    //
    // Never touches the network. The interactive session uses this to tell
    // whether a refresh will actually hit GitHub.
    pub fn cached(&self) -> Option<Vec<Repository>> {
        self.cache.get(&self.config.cache_key())
    }

    // Returns the user's public, non-fork repositories, newest first
    //
    // Returns: the cached list if it is younger than the cache ttl, otherwise
    // a freshly fetched list (which then replaces the cache entry)
    pub async fn fetch_repositories(&self) -> Result<Vec<Repository>, FetchError> {
        let cache_key = self.config.cache_key();

        if let Some(cached) = self.cache.get(&cache_key) {
            debug!(key = %cache_key, count = cached.len(), "Cache hit");
            return Ok(cached);
        }

        debug!(
            key = %cache_key,
            ttl_secs = self.cache.ttl().num_seconds(),
            "Cache miss, fetching from GitHub"
        );

        let url = self.repos_url()?;
        let repositories = self.fetch_page(url).await?;
        let fetched = repositories.len();

        let kept = showcase(repositories);
        info!(
            username = %self.config.username,
            fetched,
            kept = kept.len(),
            "Loaded repositories"
        );

        self.cache.insert(cache_key, kept.clone());
        Ok(kept)
    }

    // Fetches (or reuses) the list and keeps the repositories matching `query`
    //
    // An empty or whitespace-only query returns everything.
    pub async fn search_repositories(&self, query: &str) -> Result<Vec<Repository>, FetchError> {
        let all = self.fetch_repositories().await?;

        if query.trim().is_empty() {
            return Ok(all);
        }

        let needle = query.to_lowercase();
        Ok(all
            .into_iter()
            .filter(|repo| repo.matches_search(&needle))
            .collect())
    }

    // Builds {api_base}/users/{username}/repos?per_page=100&sort=updated
    //
    // The username is pushed as a single path segment, so characters like
    // '/', '?' or '#' are percent-encoded instead of reshaping the URL.
    fn repos_url(&self) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.config.api_base)?;

        url.path_segments_mut()
            .map_err(|_| FetchError::CannotBeABase(self.config.api_base.clone()))?
            .pop_if_empty()
            .extend(["users", self.config.username.as_str(), "repos"]);

        url.query_pairs_mut()
            .append_pair("per_page", &self.config.per_page.to_string())
            .append_pair("sort", "updated");

        Ok(url)
    }

    // Performs the GET and decodes the JSON array
    async fn fetch_page(&self, url: Url) -> Result<Vec<Repository>, FetchError> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Remote { status });
        }

        response.json().await.map_err(FetchError::Decode)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a typed error (FetchError) instead of anyhow here?
//    - Callers need to tell a 404 apart from a dropped connection
//    - thiserror generates Display and Error impls from the #[error] strings
//    - main.rs still uses anyhow, and `?` converts FetchError into it
//
// 2. Why does fetch_repositories take &self and not &mut self?
//    - The cache is a DashMap, which can be written through a shared
//      reference
//    - So one source can be shared by many callers without a Mutex around it
//
// 3. What does .map_err(FetchError::Transport) do?
//    - An enum variant with one field is also a function
//    - FetchError::Transport has type fn(reqwest::Error) -> FetchError
//    - map_err applies it to the error, leaving Ok values untouched
// -----------------------------------------------------------------------------
