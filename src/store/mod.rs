//! Persistence boundary: one SQLite file holding the full table state as a
//! single JSON blob, plus the internal audit log.

pub mod log;
pub mod state;

use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use rusqlite::Connection;
use std::path::Path;

/// Thin connection wrapper so callers never touch rusqlite directly.
pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> rusqlite::Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}

/// Open (creating if needed) the database at `path` and guarantee the schema.
/// The parent directory is created first so `--db` may point anywhere.
pub fn open(path: &str) -> AppResult<DbPool> {
    ensure_parent_dir(Path::new(path))?;
    let pool = DbPool::new(path)?;
    state::init_store(&pool.conn)?;
    Ok(pool)
}
