// src/export/model.rs

use serde::Serialize;

/// Struttura “piatta” per export delle sessioni.
#[derive(Serialize, Clone, Debug)]
pub struct LedgerRow {
    pub date: String,
    pub table: String,
    pub seat: u8,
    pub member: String,
    pub session_start: String,
    pub session_end: String,
    pub active_seconds: i64,
    pub rest_seconds: i64,
    pub duration: String,
    pub buy_in: String,
    pub transfer: String,
}

/// Header block of an export: one table, one closing timestamp.
#[derive(Serialize, Clone, Debug)]
pub struct SheetMeta {
    pub table: String,
    pub date: String,
    pub blinds: String,
    pub opened_at: String,
    pub closed_at: String,
    pub elapsed: String,
    pub total_buy_in: String,
    pub members: usize,
    pub sessions: usize,
}

/// A complete export document: header block plus one row per closed session.
#[derive(Serialize, Clone, Debug)]
pub struct ExportSheet {
    pub meta: SheetMeta,
    pub rows: Vec<LedgerRow>,
}

impl SheetMeta {
    /// Label/value pairs in the order they appear in the CSV header block.
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("table", self.table.clone()),
            ("date", self.date.clone()),
            ("blinds", self.blinds.clone()),
            ("opened_at", self.opened_at.clone()),
            ("closed_at", self.closed_at.clone()),
            ("elapsed", self.elapsed.clone()),
            ("total_buy_in", self.total_buy_in.clone()),
            ("members", self.members.to_string()),
            ("sessions", self.sessions.to_string()),
        ]
    }
}
