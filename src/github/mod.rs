// src/github/mod.rs
// =============================================================================
// This module is the repository data source.
//
// Currently implements:
// - The Repository record as GitHub returns it
// - The "public, non-fork, newest first" showcase rule
// - A cached fetch of the configured user's repositories
// - Free-text search over the fetched list
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod repository;

pub use fetch::{FetchError, RepositorySource};
pub use repository::Repository;

#[cfg(test)]
pub(crate) use repository::fixtures;
