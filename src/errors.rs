//! Unified application error type.
//! All modules (store, core, cli, export, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid seat number: {0} (expected 1..=9)")]
    InvalidSeat(String),

    #[error("Invalid buy-in amount: {0}")]
    InvalidAmount(String),

    // ---------------------------
    // Precondition violations
    // (operation rejected, state left untouched)
    // ---------------------------
    #[error("No table matches '{0}'")]
    UnknownTable(String),

    #[error("Table {0} is not running; start the clock first")]
    TableNotRunning(String),

    #[error("Seat {seat} on table {table} requires a member name")]
    EmptyMember { table: String, seat: u8 },

    #[error("Member '{member}' already occupies seat {seat}")]
    DuplicateMember { member: String, seat: u8 },

    #[error("Cannot pause table {table}: {seated} seat(s) still seated")]
    SeatedSeatsBlockPause { table: String, seated: usize },

    #[error("No seats selected")]
    NothingSelected,

    #[error("Transfer no longer applies: {0}")]
    TransferConflict(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
