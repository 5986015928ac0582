// src/display/mod.rs
// =============================================================================
// Presentation helpers shared by every subcommand.
//
// Submodules:
// - colors: language → hex color
// - dates: "Updated 3 days ago" style labels
// - card: one repository rendered as a text card
// =============================================================================

mod card;
mod colors;
mod dates;

pub use card::render_card;
pub use colors::language_color;
pub use dates::format_date;
