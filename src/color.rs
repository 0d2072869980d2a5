//! Terminal color helpers for CLI output.
//!
//! Engineer names get a stable color derived from the name.

/// ANSI color codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";

    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

use codes::*;

/// Palette for engineer names.
const ENGINEER_COLORS: &[&str] = &[
    CYAN,
    MAGENTA,
    YELLOW,
    BLUE,
    BRIGHT_MAGENTA,
    BRIGHT_YELLOW,
    BRIGHT_BLUE,
    GREEN,
    BRIGHT_GREEN,
];

/// Stable color for an engineer name.
pub fn engineer_color(name: &str) -> &'static str {
    let sum = name
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    ENGINEER_COLORS[sum % ENGINEER_COLORS.len()]
}

/// Color an engineer name.
pub fn engineer(name: &str) -> String {
    format!("{}{}{}{}", BOLD, engineer_color(name), name, RESET)
}

/// Color success messages (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", GREEN, text, RESET)
}

/// Color warning messages (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", YELLOW, text, RESET)
}

/// Color info messages (cyan).
pub fn info(text: &str) -> String {
    format!("{}{}{}", CYAN, text, RESET)
}

/// Color a label (bold).
pub fn label(text: &str) -> String {
    format!("{}{}{}", BOLD, text, RESET)
}

/// Color a number/count (bright cyan).
pub fn number(n: impl std::fmt::Display) -> String {
    format!("{}{}{}", BRIGHT_CYAN, n, RESET)
}
