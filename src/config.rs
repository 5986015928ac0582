// src/config.rs
// =============================================================================
// Runtime configuration.
//
// Most values are fixed product decisions (page size, cache window, how many
// cards to show before "show more"). Only the GitHub username and the API
// base URL can be changed, through CLI flags or SHOWCASE_* variables.
// =============================================================================

use chrono::Duration;

use crate::cli::GlobalArgs;
use crate::retry::RetryPolicy;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USERNAME: &str = "gsaikrishna8";
pub const PER_PAGE: u32 = 100;
pub const CACHE_TTL_MINUTES: i64 = 5;
pub const DEFAULT_DISPLAY_COUNT: usize = 6;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the GitHub REST API, without a trailing path
    pub api_base: String,
    /// Whose repositories to show
    pub username: String,
    /// Results requested per page (only one page is ever fetched)
    pub per_page: u32,
    /// How long a fetched list stays fresh
    pub cache_ttl: Duration,
    /// Cards shown before the list is expanded
    pub display_count: usize,
    pub retry: RetryPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            per_page: PER_PAGE,
            cache_ttl: Duration::minutes(CACHE_TTL_MINUTES),
            display_count: DEFAULT_DISPLAY_COUNT,
            retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    // Builds the configuration from parsed global CLI options
    pub fn from_args(args: &GlobalArgs) -> Self {
        Self {
            api_base: args.api_base.trim_end_matches('/').to_string(),
            username: args.username.clone(),
            ..Self::default()
        }
    }

    // The cache key for this user's repository list
    pub fn cache_key(&self) -> String {
        format!("repos-{}", self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.per_page, 100);
        assert_eq!(config.cache_ttl, Duration::minutes(5));
        assert_eq!(config.display_count, 6);
        assert_eq!(config.retry.max_retries, 2);
    }

    #[test]
    fn test_from_args_strips_trailing_slash() {
        let args = GlobalArgs {
            username: "octocat".to_string(),
            api_base: "http://localhost:8080/".to_string(),
            log_level: "warn".to_string(),
        };
        let config = Config::from_args(&args);
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.username, "octocat");
        assert_eq!(config.cache_key(), "repos-octocat");
    }
}
