//! Table clock transitions: start/resume, pause, stop.
//!
//! All transitions are pure: they take the current table plus an explicit
//! `now` and return a new table (or a rejection that leaves the input
//! untouched). The live reading comes from `Table::elapsed_at`, the shared
//! projection over the stored anchor.

use crate::errors::{AppError, AppResult};
use crate::models::Table;
use crate::utils::time::render_timestamp;
use chrono::{DateTime, Local};

/// Start the clock, or resume it after a pause. No-op while running.
/// The first start of a table also stamps `opened_at`.
pub fn start_or_resume(table: &Table, now: DateTime<Local>) -> Table {
    if table.is_running {
        return table.clone();
    }

    let mut t = table.clone();
    t.is_running = true;
    t.last_start_time = Some(now);
    t.closed_at = None;
    if t.opened_at.is_none() {
        t.opened_at = Some(render_timestamp(now));
    }
    t
}

/// Freeze the clock. Rejected while any seat is still seated (resting seats
/// are fine); a stopped clock pauses as a no-op.
pub fn pause(table: &Table, now: DateTime<Local>) -> AppResult<Table> {
    ensure_no_seated(table)?;

    if !table.is_running {
        return Ok(table.clone());
    }

    let mut t = table.clone();
    t.elapsed_seconds = table.elapsed_at(now);
    t.last_start_time = None;
    t.is_running = false;
    Ok(t)
}

/// Close the table for the day: freeze like `pause` and stamp `closed_at`.
///
/// The caller exports the ledger from the returned snapshot *before*
/// persisting it, so the export always sees the frozen elapsed time and the
/// ledger as of the close.
pub fn stop(table: &Table, now: DateTime<Local>) -> AppResult<Table> {
    ensure_no_seated(table)?;

    let mut t = table.clone();
    t.elapsed_seconds = table.elapsed_at(now);
    t.last_start_time = None;
    t.is_running = false;
    t.closed_at = Some(render_timestamp(now));
    Ok(t)
}

fn ensure_no_seated(table: &Table) -> AppResult<()> {
    let seated = table.seated_count();
    if seated > 0 {
        return Err(AppError::SeatedSeatsBlockPause {
            table: table.id.clone(),
            seated,
        });
    }
    Ok(())
}
