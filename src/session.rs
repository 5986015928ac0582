// src/session.rs
// =============================================================================
// The interactive `explore` session.
//
// Reads one command per line from stdin and re-renders the project list after
// each one. A single RepositorySource lives for the whole session, so its
// cache keeps repeated renders off the network for a few minutes.
//
// Commands:
//   search <text>   filter by text (no text clears the search)
//   lang <name>     filter by language; `lang all` clears it
//   more / less     expand or collapse the list
//   clear           reset every filter
//   refresh         load again (served from cache while it is fresh)
//   help            list commands
//   quit            leave
// =============================================================================

use anyhow::Result;
use chrono::Utc;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::github::RepositorySource;
use crate::query::{available_languages, ViewState};
use crate::report::{print_load_error, write_view};
use crate::retry::load_repositories;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    /// None selects "All"
    Language(Option<String>),
    ShowMore,
    ShowLess,
    Clear,
    Refresh,
    Help,
    Quit,
}

// Parses one input line
//
// Returns: None for blank lines and unknown commands
pub fn parse_command(line: &str) -> Option<SessionCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "s" => SessionCommand::Search(rest.to_string()),
        "lang" | "language" | "l" => {
            if rest.is_empty() || rest.eq_ignore_ascii_case("all") {
                SessionCommand::Language(None)
            } else {
                SessionCommand::Language(Some(rest.to_string()))
            }
        }
        "more" => SessionCommand::ShowMore,
        "less" => SessionCommand::ShowLess,
        "clear" => SessionCommand::Clear,
        "refresh" | "r" => SessionCommand::Refresh,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => return None,
    };

    Some(command)
}

// Runs the session until `quit` or end of input
//
// Returns: exit code 0, or 1 if the last load attempt failed
pub async fn run(source: &RepositorySource) -> Result<i32> {
    let mut state = ViewState::default();
    let mut last_load_ok = render(source, &state).await;
    print_help();
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                println!("Unknown command '{}'. Type `help` for a list.", line.trim());
            }
            prompt();
            continue;
        };
        debug!(?command, "Session command");

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => print_help(),
            SessionCommand::Refresh => {
                if source.cached().is_some() {
                    println!("♻️  Projects are still fresh, showing cached results");
                } else {
                    println!("🌐 Fetching the latest repositories from GitHub...");
                }
                last_load_ok = render(source, &state).await;
            }
            SessionCommand::Language(Some(language)) => {
                // Validate against the languages in the current list
                let repos = match load_repositories(source).await {
                    Ok(repos) => repos,
                    Err(e) => {
                        print_load_error(&e, "Type `refresh` to try again");
                        last_load_ok = false;
                        prompt();
                        continue;
                    }
                };

                let available = available_languages(&repos);
                if !state.select_language(&language, &available) {
                    println!(
                        "Unknown language '{}'. Available: {}",
                        language,
                        available.join(", ")
                    );
                } else {
                    last_load_ok = render(source, &state).await;
                }
            }
            other => {
                apply(&mut state, other);
                last_load_ok = render(source, &state).await;
            }
        }

        prompt();
    }

    Ok(if last_load_ok { 0 } else { 1 })
}

// Applies a command that only changes the view state
fn apply(state: &mut ViewState, command: SessionCommand) {
    match command {
        SessionCommand::Search(text) => state.search = text,
        SessionCommand::Language(None) => state.clear_language(),
        SessionCommand::ShowMore => state.set_show_all(true),
        SessionCommand::ShowLess => state.set_show_all(false),
        SessionCommand::Clear => state.clear(),
        _ => {}
    }
}

// Loads (or reuses) the repositories and prints the current view
async fn render(source: &RepositorySource, state: &ViewState) -> bool {
    match load_repositories(source).await {
        Ok(repos) => {
            let view = state.view(&repos, source.config().display_count);
            println!();
            // A closed stdout only loses this render
            let _ = write_view(&mut std::io::stdout().lock(), &view, state, Utc::now(), "type `more`");
            true
        }
        Err(e) => {
            print_load_error(&e, "Type `refresh` to try again");
            false
        }
    }
}

fn prompt() {
    print!("explore> ");
    // A failed flush only delays the prompt
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  search <text>   filter by name, description, language or topic");
    println!("  lang <name>     filter by language (`lang all` to clear)");
    println!("  more / less     expand or collapse the list");
    println!("  clear           reset all filters");
    println!("  refresh         load the latest repositories");
    println!("  help            show this list");
    println!("  quit            leave");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        assert_eq!(
            parse_command("search  rest api "),
            Some(SessionCommand::Search("rest api".to_string()))
        );
        assert_eq!(
            parse_command("search"),
            Some(SessionCommand::Search(String::new()))
        );
    }

    #[test]
    fn test_parse_language() {
        assert_eq!(
            parse_command("lang C++"),
            Some(SessionCommand::Language(Some("C++".to_string())))
        );
        assert_eq!(parse_command("lang ALL"), Some(SessionCommand::Language(None)));
        assert_eq!(parse_command("lang"), Some(SessionCommand::Language(None)));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("more"), Some(SessionCommand::ShowMore));
        assert_eq!(parse_command("LESS"), Some(SessionCommand::ShowLess));
        assert_eq!(parse_command("clear"), Some(SessionCommand::Clear));
        assert_eq!(parse_command(" refresh "), Some(SessionCommand::Refresh));
        assert_eq!(parse_command("?"), Some(SessionCommand::Help));
        assert_eq!(parse_command("q"), Some(SessionCommand::Quit));
    }

    #[test]
    fn test_parse_unknown_or_blank() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("deploy prod"), None);
    }

    #[test]
    fn test_apply_updates_state() {
        let mut state = ViewState::default();

        apply(&mut state, SessionCommand::Search("api".to_string()));
        apply(&mut state, SessionCommand::ShowMore);
        assert_eq!(state.search, "api");
        assert!(state.show_all);

        state.language = Some("Go".to_string());
        apply(&mut state, SessionCommand::Language(None));
        assert_eq!(state.language, None);

        apply(&mut state, SessionCommand::Clear);
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_less_keeps_collapsed_list_collapsed() {
        let mut state = ViewState::default();
        apply(&mut state, parse_command("less").unwrap());
        assert!(!state.show_all);
    }

    #[test]
    fn test_more_twice_stays_expanded() {
        let mut state = ViewState::default();
        apply(&mut state, parse_command("more").unwrap());
        apply(&mut state, parse_command("more").unwrap());
        assert!(state.show_all);

        apply(&mut state, parse_command("less").unwrap());
        assert!(!state.show_all);
    }
}
