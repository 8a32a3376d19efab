//! Colored stderr diagnostics for capabilities.
//!
//! Stdout carries the JSON protocol, so everything here goes to stderr.

use std::fmt::Display;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

/// Environment variable that turns on debug output.
pub const DEBUG_ENV: &str = "CAPABILITY_DEBUG";

/// Whether debug output is enabled for this process.
pub fn debug_enabled() -> bool {
    std::env::var(DEBUG_ENV).is_ok()
}

/// Log a debug message, only when `CAPABILITY_DEBUG` is set.
pub fn debug(message: impl Display) {
    if debug_enabled() {
        eprintln!("{CYAN}[debug]{RESET} {DIM}{}{RESET}", message);
    }
}

/// Log an error.
pub fn error(message: impl Display) {
    eprintln!("{RED}{BOLD}[error]{RESET} {RED}✗{RESET} {}", message);
}

/// Strip control characters and cut to `max` chars for display.
pub fn truncate(s: &str, max: usize) -> String {
    let clean: String = s
        .chars()
        .filter(|c| !c.is_control() || *c == ' ')
        .collect();
    let trimmed = clean.trim();
    if trimmed.chars().count() > max {
        let head: String = trimmed.chars().take(max).collect();
        format!("{}...", head)
    } else {
        trimmed.to_string()
    }
}
