// src/display/colors.rs
// =============================================================================
// Language → badge color lookup.
//
// The table is a fixed product choice. Anything not in it (including "no
// language at all") gets the neutral gray.
// =============================================================================

pub const DEFAULT_COLOR: &str = "#6b7280";

const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f7df1e"),
    ("TypeScript", "#3178c6"),
    ("Python", "#3776ab"),
    ("Java", "#ed8b00"),
    ("C++", "#00599c"),
    ("C", "#a8b9cc"),
    ("PHP", "#777bb4"),
    ("Ruby", "#cc342d"),
    ("Go", "#00add8"),
    ("Rust", "#dea584"),
    ("Swift", "#fa7343"),
    ("Kotlin", "#f18e33"),
    ("Dart", "#0175c2"),
    ("Shell", "#89e051"),
    ("HTML", "#e34c26"),
    ("CSS", "#1572b6"),
    ("Vue", "#4fc08d"),
    ("React", "#61dafb"),
    ("Angular", "#dd0031"),
];

// Returns the hex color for a language name (exact, case-sensitive match)
pub fn language_color(language: Option<&str>) -> &'static str {
    let Some(language) = language else {
        return DEFAULT_COLOR;
    };

    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}
