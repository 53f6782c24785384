//! Terminal status messages.
//!
//! Status goes to stderr; command results go to stdout so they can be piped.

mod messages;

pub use messages::{info, success, warning};

use crate::logger::should_use_colors;

/// Set console color state for stderr. Call once, early in `main`.
pub fn init_colors(no_color: bool) {
    console::set_colors_enabled_stderr(!no_color && should_use_colors());
}
