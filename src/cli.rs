// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The CLI is the presentation layer of the showcase: it fetches the
// repositories, applies the user's search and language filter, and prints
// project cards.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Args, Parser, Subcommand};

use crate::config::{DEFAULT_API_BASE, DEFAULT_USERNAME};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "repo-showcase",
    version,
    about = "Showcase a developer's public GitHub repositories in the terminal",
    long_about = "repo-showcase lists a developer's public, non-fork GitHub repositories, \
                  newest first, with search, a language filter and project cards."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// GitHub user whose repositories are shown
    #[arg(long, global = true, env = "SHOWCASE_USERNAME", default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Base URL of the GitHub REST API
    #[arg(long, global = true, env = "SHOWCASE_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "SHOWCASE_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects, newest first
    ///
    /// Example: repo-showcase projects --search api --language Go
    Projects {
        /// Only show projects whose name, description, language or topics contain this text
        #[arg(long, short)]
        search: Option<String>,

        /// Only show projects written in this language (exact match)
        #[arg(long, short)]
        language: Option<String>,

        /// Show every matching project instead of the first six
        #[arg(long)]
        all: bool,

        /// Output results in JSON format instead of cards
        #[arg(long)]
        json: bool,
    },

    /// List the languages that can be used with --language
    ///
    /// Example: repo-showcase languages --search web
    Languages {
        /// Only consider projects matching this text
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Print the badge color for a language
    ///
    /// Example: repo-showcase color Rust
    Color {
        /// Language name, e.g. "TypeScript"
        language: Option<String>,
    },

    /// Print the "Updated ..." label for an ISO-8601 timestamp
    ///
    /// Example: repo-showcase updated 2024-05-30T08:15:00Z
    Updated {
        /// RFC 3339 timestamp, as found in a repository's updated_at
        timestamp: String,
    },

    /// Browse projects interactively (type `help` once started)
    Explore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_projects_flags() {
        let cli = Cli::try_parse_from([
            "repo-showcase",
            "projects",
            "--search",
            "api",
            "-l",
            "Go",
            "--all",
            "--username",
            "octocat",
        ])
        .unwrap();

        assert_eq!(cli.global.username, "octocat");
        match cli.command {
            Commands::Projects {
                search,
                language,
                all,
                json,
            } => {
                assert_eq!(search.as_deref(), Some("api"));
                assert_eq!(language.as_deref(), Some("Go"));
                assert!(all);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
