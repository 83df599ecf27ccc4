/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Seat status color:
/// seated → green
/// rest → yellow
/// idle → grey
pub fn color_for_status(code: &str) -> &'static str {
    match code {
        "seated" => GREEN,
        "rest" => YELLOW,
        _ => GREY,
    }
}

/// Returns GREY when the field is empty (None or ""), and RESET otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => RESET,
        _ => GREY,
    }
}

/// Running/stopped clock color for the tables listing.
pub fn color_for_clock(is_running: bool) -> &'static str {
    if is_running { GREEN } else { GREY }
}
