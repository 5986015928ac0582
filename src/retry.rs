// src/retry.rs
// =============================================================================
// Caller-side retry policy for loading repositories.
//
// The data source never retries on its own. Whoever calls it decides how
// hard to try; the CLI uses the defaults below: two extra attempts with a
// fixed one second pause between them.
// =============================================================================

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

use crate::github::{FetchError, Repository, RepositorySource};

pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure
    pub max_retries: u32,
    /// Fixed pause before each retry
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
        }
    }
}

// Runs `op` until it succeeds or the policy is exhausted
//
// Parameters:
//   policy: how many retries and how long to wait between them
//   op: produces a fresh future for every attempt
//
// Returns: the first Ok, or the error from the final attempt
pub async fn with_retries<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut retries = 0;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if retries < policy.max_retries => {
                retries += 1;
                warn!(
                    attempt = retries,
                    max_retries = policy.max_retries,
                    "Attempt failed, retrying in {:?}: {}",
                    policy.delay,
                    e
                );
                tokio::time::sleep(policy.delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

// Loads repositories with the source's configured retry policy
pub async fn load_repositories(source: &RepositorySource) -> Result<Vec<Repository>, FetchError> {
    let policy = source.config().retry;
    with_retries(&policy, move || source.fetch_repositories()).await
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does with_retries take a closure instead of a future?
//    - A future can only be awaited once
//    - Calling `op()` again builds a brand-new request for each attempt
//
// 2. What is `Err(e) if retries < policy.max_retries`?
//    - A match guard: the arm only matches when the condition is true
//    - Otherwise matching falls through to the final `Err(e)` arm
// -----------------------------------------------------------------------------
