//! Session-record derivation: the one place a live seat turns into an
//! immutable ledger entry.

use crate::models::{BuyInValue, Seat, SessionRecord, TransferNote};
use crate::utils::time::render_timestamp;
use chrono::{DateTime, Local};

/// Derive the closing record for a seat's current session.
///
/// Final active/rest counts come from the same projection rule the live
/// display uses; a seat that never opened a session (`session_start` unset)
/// yields no record.
pub fn close_session(
    seat: &Seat,
    table_id: &str,
    table_name: &str,
    now: DateTime<Local>,
    buy_in: BuyInValue,
    transfer: Option<TransferNote>,
) -> Option<SessionRecord> {
    let started = seat.session_start?;

    Some(SessionRecord {
        table_id: table_id.to_string(),
        table_name: table_name.to_string(),
        seat_id: seat.id,
        member: seat.member.clone(),
        started_at: render_timestamp(started),
        ended_at: render_timestamp(now),
        active_seconds: seat.active_seconds_at(now),
        rest_seconds: seat.rest_seconds_at(now),
        buy_in,
        transfer,
    })
}
