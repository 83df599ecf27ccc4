//! Snapshot persistence: the whole room lives as one JSON document under a
//! fixed key, rewritten in full on every mutation.

use crate::errors::{AppError, AppResult};
use crate::models::{SEATS_PER_TABLE, Table};
use crate::store::DbPool;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::io;

/// Storage key of the current snapshot format.
pub const STATE_KEY: &str = "tables/v1";

/// Tables a fresh room starts with.
pub const DEFAULT_TABLE_COUNT: usize = 4;

/// Ensure the `app_state` and `log` tables exist.
pub fn init_store(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS app_state (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// The default room: four stopped tables with nine idle seats each.
pub fn default_tables() -> Vec<Table> {
    (1..=DEFAULT_TABLE_COUNT)
        .map(|n| Table::fresh(&format!("T{n}"), &format!("Table {n}")))
        .collect()
}

/// Load the full table set.
///
/// A missing row or an unreadable snapshot degrades to the default room so
/// the tool always starts; only real database errors surface to the caller.
pub fn load_tables(pool: &mut DbPool) -> AppResult<Vec<Table>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT value FROM app_state WHERE key = ?1")?;
    let blob: Option<String> = stmt.query_row([STATE_KEY], |row| row.get(0)).optional()?;

    let Some(raw) = blob else {
        return Ok(default_tables());
    };

    match serde_json::from_str::<Vec<Table>>(&raw) {
        Ok(tables) if snapshot_is_sound(&tables) => Ok(tables),
        _ => Ok(default_tables()),
    }
}

/// Persist the full table set under the fixed key.
pub fn save_tables(pool: &mut DbPool, tables: &[Table]) -> AppResult<()> {
    let blob = serde_json::to_string(tables).map_err(|e| {
        AppError::from(io::Error::other(format!("state serialization error: {e}")))
    })?;
    let now = Local::now().to_rfc3339();

    pool.conn.execute(
        "INSERT INTO app_state (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                        updated_at = excluded.updated_at",
        params![STATE_KEY, blob, now],
    )?;
    Ok(())
}

// A usable snapshot has at least one table and exactly nine seats numbered
// 1..=9 on each of them.
fn snapshot_is_sound(tables: &[Table]) -> bool {
    !tables.is_empty()
        && tables.iter().all(|t| {
            t.seats.len() == SEATS_PER_TABLE
                && t.seats
                    .iter()
                    .enumerate()
                    .all(|(i, s)| s.id == (i + 1) as u8)
        })
}
