// src/query/filter.rs
// =============================================================================
// Pure functions that narrow a repository list down for display.
//
// Nothing here fetches or mutates anything. Each function takes the list as a
// slice and hands back new values, so the same list can be re-queried every
// time the search text or language changes.
// =============================================================================

use std::collections::BTreeSet;

use crate::github::Repository;

// Distinct languages present in `repositories`, alphabetically sorted
//
// Repositories without a detected language are skipped.
pub fn available_languages(repositories: &[Repository]) -> Vec<String> {
    repositories
        .iter()
        .filter_map(|repo| repo.language.as_deref())
        .filter(|language| !language.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// Keeps the repositories matching both the search text and the language
//
// Parameters:
//   repositories: the full, already sorted list
//   search: free text; blank means "no search filter"
//   language: exact, case-sensitive language; None or "" means "any"
//
// Returns: matching repositories, in their original order
pub fn apply_filters(
    repositories: &[Repository],
    search: &str,
    language: Option<&str>,
) -> Vec<Repository> {
    let needle = (!search.trim().is_empty()).then(|| search.to_lowercase());
    let language = language.filter(|l| !l.is_empty());

    repositories
        .iter()
        .filter(|repo| match &needle {
            Some(needle) => repo.matches_search(needle),
            None => true,
        })
        .filter(|repo| match language {
            Some(language) => repo.language.as_deref() == Some(language),
            None => true,
        })
        .cloned()
        .collect()
}

// The slice of `filtered` that is actually rendered
//
// Shows the first `count` repositories unless `show_all` is set.
pub fn display_window(filtered: &[Repository], show_all: bool, count: usize) -> &[Repository] {
    if show_all {
        filtered
    } else {
        &filtered[..filtered.len().min(count)]
    }
}
