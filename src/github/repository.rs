// src/github/repository.rs
// =============================================================================
// The repository record returned by GitHub's "list repositories for a user"
// endpoint, plus the rules for which records we show and in what order.
//
// GitHub sends dozens of fields per repository. We only declare the ones we
// use; serde silently skips the rest.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub fork: bool,
    // Missing visibility means we can't prove the repo is public
    #[serde(default)]
    pub visibility: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Repository {
    // Only original, public repositories are shown
    pub fn is_showcased(&self) -> bool {
        !self.fork && self.visibility == "public"
    }

    // Case-insensitive substring match on name, description, language and topics
    //
    // `needle` must already be lowercased
    pub fn matches_search(&self, needle: &str) -> bool {
        let contains = |text: &str| text.to_lowercase().contains(needle);

        contains(&self.name)
            || self.description.as_deref().is_some_and(contains)
            || self.language.as_deref().is_some_and(contains)
            || self.topics.iter().any(|topic| contains(topic))
    }
}

// Drops forks and non-public repositories, then sorts newest first
//
// The sort is stable: repositories updated at the same instant keep the
// order GitHub returned them in.
pub fn showcase(repositories: Vec<Repository>) -> Vec<Repository> {
    let mut kept: Vec<Repository> = repositories
        .into_iter()
        .filter(Repository::is_showcased)
        .collect();

    kept.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    kept
}

// Test fixture shared by the other modules' tests
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::{Duration, TimeZone};

    pub fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    // A public, non-fork repository updated `days_ago` days before base_time()
    pub fn repo(id: u64, name: &str, language: Option<&str>, days_ago: i64) -> Repository {
        Repository {
            id,
            name: name.to_string(),
            full_name: format!("octocat/{}", name),
            description: None,
            html_url: format!("https://github.com/octocat/{}", name),
            stargazers_count: 0,
            forks_count: 0,
            language: language.map(str::to_string),
            updated_at: base_time() - Duration::days(days_ago),
            fork: false,
            visibility: "public".to_string(),
            topics: Vec::new(),
        }
    }
}
