// src/report.rs
// =============================================================================
// Prints views to the terminal, either as project cards or as JSON.
//
// Shared by the one-shot `projects` subcommand and the interactive `explore`
// session, which only differ in how they tell the user to expand the list.
// =============================================================================

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::io::{self, Write};

use crate::display::{language_color, render_card};
use crate::query::{ProjectView, ViewState};

// Writes the language filter row, the cards and the summary
//
// Parameters:
//   out: where to write (stdout in the CLI, a buffer in tests)
//   view: what to show
//   state: the filters that produced it (for the empty-result message)
//   now: reference time for "Updated ..." labels
//   expand_hint: how the user expands the list in this context
pub fn write_view(
    out: &mut impl Write,
    view: &ProjectView,
    state: &ViewState,
    now: DateTime<Utc>,
    expand_hint: &str,
) -> io::Result<()> {
    if !view.languages.is_empty() {
        writeln!(out, "🔎 Filter by language: {}", language_row(view, state))?;
        writeln!(out)?;
    }

    if view.total == 0 {
        if state.has_active_filters() {
            writeln!(out, "No projects match your search criteria")?;
        } else {
            writeln!(out, "No repositories found")?;
        }
        return Ok(());
    }

    for repo in &view.shown {
        writeln!(out, "{}", render_card(repo, now))?;
        writeln!(out)?;
    }

    writeln!(out, "📊 Showing {} of {} projects", view.showing(), view.total)?;

    if view.hidden() > 0 {
        writeln!(out, "⬇️  Show More ({} more): {}", view.hidden(), expand_hint)?;
    } else if state.show_all && view.expandable {
        writeln!(out, "⬆️  Showing everything (Show Less to collapse)")?;
    }

    Ok(())
}

// Prints {showing, total, repositories} as pretty JSON
pub fn print_json(view: &ProjectView) -> Result<()> {
    let output = json!({
        "showing": view.showing(),
        "total": view.total,
        "repositories": view.shown,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

// Prints every available language with its badge color
pub fn print_languages(languages: &[String]) {
    if languages.is_empty() {
        println!("No languages found");
        return;
    }

    for language in languages {
        println!("{:<20} {}", language, language_color(Some(language)));
    }
}

// The user-facing message when repositories could not be loaded
pub fn print_load_error(error: &dyn std::fmt::Display, retry_hint: &str) {
    eprintln!("❌ Failed to load repositories: {}", error);
    eprintln!("🔁 {}", retry_hint);
}

// "[All] Go Rust" with the active choice in brackets
fn language_row(view: &ProjectView, state: &ViewState) -> String {
    let selected = state.language.as_deref();
    let mut row = vec![mark("All", selected.is_none())];

    row.extend(
        view.languages
            .iter()
            .map(|language| mark(language, selected == Some(language.as_str()))),
    );

    row.join(" ")
}

fn mark(label: &str, active: bool) -> String {
    if active {
        format!("[{}]", label)
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fixtures::{base_time, repo};

    #[test]
    fn test_language_row_marks_selection() {
        let repos = vec![repo(1, "a", Some("Rust"), 0), repo(2, "b", Some("Go"), 1)];
        let mut state = ViewState::default();
        let view = state.view(&repos, 6);
        assert_eq!(language_row(&view, &state), "[All] Go Rust");

        assert!(state.select_language("Rust", &view.languages));
        let view = state.view(&repos, 6);
        assert_eq!(language_row(&view, &state), "All Go [Rust]");
    }

    fn render(view: &ProjectView, state: &ViewState) -> String {
        let mut out = Vec::new();
        write_view(&mut out, view, state, base_time(), "type `more`").unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_list_without_filters() {
        let state = ViewState::default();
        let output = render(&state.view(&[], 6), &state);
        assert_eq!(output, "No repositories found\n");
    }

    #[test]
    fn test_no_match_with_active_filters() {
        let repos = vec![repo(1, "dotfiles", Some("Shell"), 0)];
        let state = ViewState {
            search: "kubernetes".to_string(),
            ..ViewState::default()
        };
        let output = render(&state.view(&repos, 6), &state);

        assert!(output.contains("No projects match your search criteria"));
        assert!(!output.contains("No repositories found"));
        assert!(!output.contains("Showing"));
    }

    #[test]
    fn test_show_more_hint_counts_hidden_projects() {
        let repos: Vec<_> = (1..=9)
            .map(|i| repo(i, &format!("project-{}", i), Some("Rust"), i as i64))
            .collect();
        let mut state = ViewState::default();

        let output = render(&state.view(&repos, 6), &state);
        assert!(output.contains("Showing 6 of 9 projects"));
        assert!(output.contains("Show More (3 more): type `more`"));
        assert_eq!(output.matches("https://github.com/octocat/").count(), 6);

        state.set_show_all(true);
        let output = render(&state.view(&repos, 6), &state);
        assert!(output.contains("Showing 9 of 9 projects"));
        assert!(!output.contains("Show More"));
        assert!(output.contains("Show Less to collapse"));
    }

    #[test]
    fn test_small_list_has_no_expand_hint() {
        let repos = vec![repo(1, "a", None, 0), repo(2, "b", None, 1)];
        let state = ViewState::default();
        let output = render(&state.view(&repos, 6), &state);

        assert!(output.contains("Showing 2 of 2 projects"));
        assert!(!output.contains("Show More"));
        assert!(!output.contains("Show Less"));
    }
}
