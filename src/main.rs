// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and build the configuration
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = repositories unavailable,
//    2 = any other error)
//
// Rust concepts used:
// - async/await: Because fetching repositories is network I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cache;         // src/cache/ - time-boxed in-memory cache
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - runtime settings
mod display;       // src/display/ - colors, dates, project cards
mod github;        // src/github/ - repository data source
mod logging;       // src/logging.rs - tracing setup
mod query;         // src/query/ - search, language filter, windowing
mod report;        // src/report.rs - terminal and JSON output
mod retry;         // src/retry.rs - caller-side retry policy
mod session;       // src/session.rs - interactive explore mode

use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::Parser;

use cli::{Cli, Commands};
use config::Config;
use github::RepositorySource;
use query::{available_languages, ViewState};
use retry::load_repositories;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = success
//   Ok(1) = repositories could not be loaded, even after retrying
//   Err = anything else (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(&cli.global.log_level)?;

    let config = Config::from_args(&cli.global);

    match cli.command {
        Commands::Projects {
            search,
            language,
            all,
            json,
        } => {
            let state = ViewState {
                search: search.unwrap_or_default(),
                language: None,
                show_all: all,
            };
            handle_projects(config, state, language, json).await
        }
        Commands::Languages { search } => {
            handle_languages(config, search.unwrap_or_default()).await
        }
        Commands::Color { language } => {
            println!("{}", display::language_color(language.as_deref()));
            Ok(0)
        }
        Commands::Updated { timestamp } => {
            let label = display::format_date(&timestamp, Utc::now())
                .map_err(|e| anyhow!("Invalid timestamp '{}': {}", timestamp, e))?;
            println!("{}", label);
            Ok(0)
        }
        Commands::Explore => {
            let source = RepositorySource::new(config)?;
            session::run(&source).await
        }
    }
}

// Handles the 'projects' subcommand
//
// Parameters:
//   config: runtime settings
//   state: search text and expansion from the command line
//   language: requested language filter, validated once the list is loaded
//   json: whether to output JSON format
async fn handle_projects(
    config: Config,
    mut state: ViewState,
    language: Option<String>,
    json: bool,
) -> Result<i32> {
    let source = RepositorySource::new(config)?;

    let repos = match load_repositories(&source).await {
        Ok(repos) => repos,
        Err(e) => {
            report::print_load_error(&e, "Run the command again to try again");
            return Ok(1);
        }
    };

    if let Some(language) = language.filter(|l| !l.is_empty()) {
        let available = available_languages(&repos);
        if !state.select_language(&language, &available) {
            return Err(anyhow!(
                "Unknown language '{}'. Available: {}",
                language,
                available.join(", ")
            ));
        }
    }

    let view = state.view(&repos, source.config().display_count);

    if json {
        report::print_json(&view)?;
    } else {
        println!(
            "🚀 GitHub projects of {} (live from GitHub)\n",
            source.config().username
        );
        report::write_view(
            &mut std::io::stdout().lock(),
            &view,
            &state,
            Utc::now(),
            "rerun with --all",
        )?;
    }

    Ok(0)
}

// Handles the 'languages' subcommand
//
// Parameters:
//   config: runtime settings
//   search: only count projects matching this text (blank = all projects)
async fn handle_languages(config: Config, search: String) -> Result<i32> {
    let source = &RepositorySource::new(config)?;
    let policy = source.config().retry;
    let query = search.as_str();

    let matching =
        retry::with_retries(&policy, move || source.search_repositories(query)).await;

    match matching {
        Ok(repos) => {
            report::print_languages(&available_languages(&repos));
            Ok(0)
        }
        Err(e) => {
            report::print_load_error(&e, "Run the command again to try again");
            Ok(1)
        }
    }
}
