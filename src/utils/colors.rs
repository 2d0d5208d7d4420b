/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// present → green, absent → red
pub fn color_for_presence(present: bool) -> &'static str {
    if present { GREEN } else { RED }
}

/// Wrap `value` in the presence color.
pub fn colorize_presence(value: &str, present: bool) -> String {
    format!("{}{}{}", color_for_presence(present), value, RESET)
}

/// Grey out an informational value.
pub fn dim(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}
