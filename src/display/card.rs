// src/display/card.rs
// =============================================================================
// Renders one repository as a "project card" for the terminal.
//
// A card looks like:
//
//   Link Guardian
//   ● Rust (#dea584)
//   Finds broken links in docs and websites
//   ⭐ 12  🍴 3  🕒 Updated 2 days ago
//   🏷️  cli · links · +1
//   https://github.com/octocat/link-guardian
// =============================================================================

use chrono::{DateTime, Utc};

use super::colors::language_color;
use super::dates::updated_label;
use crate::github::Repository;

const MAX_TOPIC_BADGES: usize = 5;

// Turns a repository slug into a display title
//
// Hyphens become spaces, and every word character that starts a word is
// uppercased. Underscores and digits count as word characters, so
// "my-cool_repo.rs" becomes "My Cool_repo.Rs".
pub fn card_title(name: &str) -> String {
    let mut title = String::with_capacity(name.len());
    let mut previous_is_word = false;

    for c in name.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric() || c == '_';

        if is_word && !previous_is_word {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        previous_is_word = is_word;
    }

    title
}

// The first five topics, then "+N" for whatever didn't fit
pub fn topic_badges(topics: &[String]) -> Vec<String> {
    let mut badges: Vec<String> = topics.iter().take(MAX_TOPIC_BADGES).cloned().collect();

    if topics.len() > MAX_TOPIC_BADGES {
        badges.push(format!("+{}", topics.len() - MAX_TOPIC_BADGES));
    }

    badges
}

// Formats a full card, one line per section, as of `now`
pub fn render_card(repo: &Repository, now: DateTime<Utc>) -> String {
    let mut lines = vec![card_title(&repo.name)];

    if let Some(language) = &repo.language {
        lines.push(format!(
            "● {} ({})",
            language,
            language_color(Some(language))
        ));
    }

    if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(description.to_string());
    }

    lines.push(format!(
        "⭐ {}  🍴 {}  🕒 {}",
        repo.stargazers_count,
        repo.forks_count,
        updated_label(repo.updated_at, now)
    ));

    let badges = topic_badges(&repo.topics);
    if !badges.is_empty() {
        lines.push(format!("🏷️  {}", badges.join(" · ")));
    }

    lines.push(repo.html_url.clone());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fixtures::{base_time, repo};

    #[test]
    fn test_card_title() {
        assert_eq!(card_title("link-guardian"), "Link Guardian");
        assert_eq!(card_title("my-cool_repo.rs"), "My Cool_repo.Rs");
        assert_eq!(card_title("dotfiles"), "Dotfiles");
        assert_eq!(card_title("2048-game"), "2048 Game");
        assert_eq!(card_title(""), "");
    }

    #[test]
    fn test_topic_badges_truncate_after_five() {
        let topics: Vec<String> = (1..=7).map(|i| format!("t{}", i)).collect();
        assert_eq!(
            topic_badges(&topics),
            vec!["t1", "t2", "t3", "t4", "t5", "+2"]
        );
        assert_eq!(topic_badges(&topics[..5]).len(), 5);
        assert!(topic_badges(&[]).is_empty());
    }

    #[test]
    fn test_render_card() {
        let mut r = repo(1, "link-guardian", Some("Rust"), 2);
        r.description = Some("Finds broken links".to_string());
        r.stargazers_count = 12;
        r.forks_count = 3;
        r.topics = vec!["cli".to_string()];

        let card = render_card(&r, base_time());
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Link Guardian",
                "● Rust (#dea584)",
                "Finds broken links",
                "⭐ 12  🍴 3  🕒 Updated 2 days ago",
                "🏷️  cli",
                "https://github.com/octocat/link-guardian",
            ]
        );
    }

    #[test]
    fn test_render_card_skips_missing_sections() {
        let r = repo(2, "notes", None, 0);
        let card = render_card(&r, base_time());
        assert_eq!(
            card,
            "Notes\n⭐ 0  🍴 0  🕒 Updated today\nhttps://github.com/octocat/notes"
        );
    }
}
