//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{clear_screen, print_scores_overview, print_welcome, warn};
pub use formatters::{format_millis, format_seconds};
