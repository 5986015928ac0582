// src/query/mod.rs
// =============================================================================
// The view query layer: turns the fetched repository list into what is
// actually displayed.
//
// Submodules:
// - filter: available languages, search and language filters, windowing
// - view: the transient view state and the view derived from it
// =============================================================================

mod filter;
mod view;

pub use filter::available_languages;
pub use view::{ProjectView, ViewState};
