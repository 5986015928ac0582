// src/query/view.rs
// =============================================================================
// Transient view state: what the user is currently looking for.
//
// ViewState holds the search text, the selected language and whether the
// list is expanded. It never owns repositories. Every render derives a fresh
// ProjectView from the current list, so changing the state never re-fetches.
// =============================================================================

use super::filter::{apply_filters, available_languages, display_window};
use crate::github::Repository;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    /// None means "All languages"
    pub language: Option<String>,
    pub show_all: bool,
}

// What gets rendered for one ViewState over one repository list
#[derive(Debug, Clone)]
pub struct ProjectView {
    /// Repositories on screen
    pub shown: Vec<Repository>,
    /// How many repositories matched the filters
    pub total: usize,
    /// Languages the user can filter by
    pub languages: Vec<String>,
    /// More matches than fit in the collapsed window
    pub expandable: bool,
}

impl ProjectView {
    pub fn showing(&self) -> usize {
        self.shown.len()
    }

    // Matches that are hidden behind "Show More"
    pub fn hidden(&self) -> usize {
        self.total - self.shown.len()
    }
}

impl ViewState {
    // Selects a language filter
    //
    // Only languages present in `available` can be selected. Returns false
    // and leaves the state untouched otherwise.
    pub fn select_language(&mut self, language: &str, available: &[String]) -> bool {
        if !available.iter().any(|l| l == language) {
            return false;
        }
        self.language = Some(language.to_string());
        true
    }

    pub fn clear_language(&mut self) {
        self.language = None;
    }

    // Expands (true) or collapses (false) the display window
    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    // Resets search, language and expansion
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.language.is_some()
    }

    // Derives the rendered view from the full repository list
    pub fn view(&self, repositories: &[Repository], display_count: usize) -> ProjectView {
        let filtered = apply_filters(repositories, &self.search, self.language.as_deref());
        let shown = display_window(&filtered, self.show_all, display_count).to_vec();

        ProjectView {
            total: filtered.len(),
            shown,
            languages: available_languages(repositories),
            expandable: filtered.len() > display_count,
        }
    }
}
