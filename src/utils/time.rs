//! Time utilities: the elapsed-seconds projection, HH:MM:SS rendering and
//! timestamp parsing. Every timed value in the app goes through these.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime};

/// Whole seconds elapsed between two instants, clamped to zero.
///
/// This is the single projection rule shared by the table clock, the live
/// seat display and session-record closing. The clamp defends against clock
/// skew (an anchor recorded after `now`).
pub fn elapsed_seconds(from: DateTime<Local>, to: DateTime<Local>) -> i64 {
    to.signed_duration_since(from).num_seconds().max(0)
}

/// Render a duration as zero-padded `HH:MM:SS`. Hours are unbounded.
pub fn format_hms(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Fixed human-readable rendering used for opened/closed and session
/// start/end timestamps.
pub fn render_timestamp(ts: DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn render_date(ts: DateTime<Local>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Parse a timestamp given on the command line.
/// Accepts `YYYY-MM-DD HH:MM:SS` and the shorter `YYYY-MM-DD HH:MM`.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .ok()?;
    naive.and_local_timezone(Local).single()
}

pub fn parse_required_timestamp(s: &str) -> AppResult<DateTime<Local>> {
    parse_timestamp(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}
