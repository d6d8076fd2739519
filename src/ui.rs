//! Centralized output formatting and diagnostics
//!
//! Section result lines go to stdout and are never suppressed. Informational
//! messages go to stderr and respect quiet mode.

use colored::{ColoredString, Colorize};
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode for the rest of the process (the `--quiet` flag).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
        || std::env::var("PRLINT_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
}

/// Returns the pass (✓ green) or fail (✗ red) glyph.
pub fn outcome_glyph(passed: bool) -> ColoredString {
    if passed {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Print an informational message to stderr unless quiet.
pub fn info(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "→".cyan(), message.dimmed());
    }
}

/// Print an error to stderr. Errors are shown even in quiet mode.
pub fn error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
