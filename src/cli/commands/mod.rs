//! Command handlers. Each file owns the commands of one concern and follows
//! the same shape: resolve `now`, load the room, transform one table through
//! the core functions, save, audit.

pub mod admin;
pub mod batch;
pub mod clock;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod reset;
pub mod seat;
pub mod status;
pub mod tables;

use crate::errors::{AppError, AppResult};
use crate::models::Table;
use crate::store::DbPool;
use crate::store::log::ttlog;
use crate::ui::messages::warning;
use crate::utils::time::parse_required_timestamp;
use chrono::{DateTime, Local};
use std::io::{self, Write};

/// Effective timestamp of a mutating command: the `--at` override, or the
/// wall clock. Core functions never read the clock themselves.
pub(crate) fn resolve_now(at: &Option<String>) -> AppResult<DateTime<Local>> {
    match at {
        Some(raw) => parse_required_timestamp(raw),
        None => Ok(Local::now()),
    }
}

/// Find a table by id (case-insensitive) or by 1-based position.
pub(crate) fn find_table_index(tables: &[Table], needle: &str) -> AppResult<usize> {
    if let Some(pos) = tables
        .iter()
        .position(|t| t.id.eq_ignore_ascii_case(needle))
    {
        return Ok(pos);
    }

    if let Ok(n) = needle.parse::<usize>()
        && n >= 1
        && n <= tables.len()
    {
        return Ok(n - 1);
    }

    Err(AppError::UnknownTable(needle.to_string()))
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Write an audit row. Log interno, non bloccante.
pub(crate) fn audit(pool: &DbPool, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&pool.conn, operation, target, message) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}
