// src/export/sheet.rs

use crate::export::model::{ExportSheet, LedgerRow, SheetMeta};
use crate::models::{SessionRecord, Table};
use crate::utils::time::render_timestamp;
use crate::utils::{format_amount, format_hms};
use chrono::{DateTime, Local};
use std::collections::BTreeSet;

/// Project a table snapshot into its export document.
///
/// `now` stamps the closing timestamp when the table is still open and
/// feeds the live elapsed projection. The total buy-in sums numeric rows
/// only; transfer rows carry their chips to the destination seat instead.
pub fn build_sheet(table: &Table, now: DateTime<Local>) -> ExportSheet {
    let rows: Vec<LedgerRow> = table.ledger.iter().map(record_to_row).collect();

    let closed_at = table
        .closed_at
        .clone()
        .unwrap_or_else(|| render_timestamp(now));
    let date = closed_at.get(..10).unwrap_or_default().to_string();

    let total: f64 = table.ledger.iter().filter_map(|r| r.buy_in.numeric()).sum();

    let members: BTreeSet<&str> = table
        .ledger
        .iter()
        .map(|r| r.member.trim())
        .filter(|m| !m.is_empty())
        .collect();

    ExportSheet {
        meta: SheetMeta {
            table: table.name.clone(),
            date,
            blinds: table.blinds.clone(),
            opened_at: table.opened_at.clone().unwrap_or_default(),
            closed_at,
            elapsed: format_hms(table.elapsed_at(now)),
            total_buy_in: format_amount(total),
            members: members.len(),
            sessions: table.ledger.len(),
        },
        rows,
    }
}

fn record_to_row(r: &SessionRecord) -> LedgerRow {
    LedgerRow {
        date: r.ended_date().to_string(),
        table: r.table_name.clone(),
        seat: r.seat_id,
        member: r.member.clone(),
        session_start: r.started_at.clone(),
        session_end: r.ended_at.clone(),
        active_seconds: r.active_seconds,
        rest_seconds: r.rest_seconds,
        duration: format_hms(r.duration_seconds()),
        buy_in: r.buy_in.display(),
        transfer: r.transfer.as_ref().map(|t| t.display()).unwrap_or_default(),
    }
}
