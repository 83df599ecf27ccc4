//! Seat lifecycle transitions: idle → seated → rest → … → idle.
//!
//! Only a transition back to idle closes a session and deposits a record in
//! the ledger. Seating a member who already occupies another seat at the
//! same table is a transfer; `seat_up` then returns `TransferPending`
//! without touching the table, and the caller commits (or abandons) it.

use crate::core::session::close_session;
use crate::errors::{AppError, AppResult};
use crate::models::{BuyInValue, SeatStatus, Table, TransferNote};
use chrono::{DateTime, Local};

/// Outcome of `seat_up`: either the new table state, or a pending transfer
/// the caller must confirm via `commit_transfer`.
#[derive(Debug, Clone)]
pub enum SeatUp {
    Applied(Table),
    TransferPending {
        member: String,
        from_seat: u8,
        to_seat: u8,
    },
}

/// Set (or clear) the member name of a seat.
/// Clearing is only allowed while the seat is idle.
pub fn set_member(table: &Table, seat_id: u8, name: &str) -> AppResult<Table> {
    let trimmed = name.trim();
    let seat = seat_ref(table, seat_id)?;

    if seat.is_occupied() && trimmed.is_empty() {
        return Err(AppError::EmptyMember {
            table: table.id.clone(),
            seat: seat_id,
        });
    }

    let mut t = table.clone();
    if let Some(s) = t.seat_mut(seat_id) {
        s.member = trimmed.to_string();
    }
    Ok(t)
}

/// Seat the member written on the seat.
///
/// Preconditions: table running, member name non-empty. An already seated
/// seat is a no-op. From rest, the open rest interval is folded and the same
/// session continues; from idle, a fresh session starts.
pub fn seat_up(table: &Table, seat_id: u8, now: DateTime<Local>) -> AppResult<SeatUp> {
    if !table.is_running {
        return Err(AppError::TableNotRunning(table.id.clone()));
    }

    let seat = seat_ref(table, seat_id)?;
    let member = seat.member.trim().to_string();
    if member.is_empty() {
        return Err(AppError::EmptyMember {
            table: table.id.clone(),
            seat: seat_id,
        });
    }

    if seat.status == SeatStatus::Seated {
        return Ok(SeatUp::Applied(table.clone()));
    }

    if let Some(existing) = table.occupied_seat_of(&member, seat_id) {
        return Ok(SeatUp::TransferPending {
            member,
            from_seat: existing.id,
            to_seat: seat_id,
        });
    }

    let mut t = table.clone();
    if let Some(s) = t.seat_mut(seat_id) {
        s.member = member;
        match s.status {
            SeatStatus::Rest => {
                // freeze the rest interval; the session continues
                s.rest_seconds = s.rest_seconds_at(now);
                s.last_rest_start = None;
            }
            SeatStatus::Idle => {
                s.active_seconds = 0;
                s.rest_seconds = 0;
                s.session_start = Some(now);
            }
            SeatStatus::Seated => {}
        }
        s.status = SeatStatus::Seated;
        s.last_active_start = Some(now);
    }
    Ok(SeatUp::Applied(t))
}

/// Commit a confirmed transfer: close the source session (annotated toward
/// the destination), move the member and their accumulated buy-in, and open
/// a fresh session on the destination seat.
pub fn commit_transfer(
    table: &Table,
    from_seat: u8,
    to_seat: u8,
    now: DateTime<Local>,
) -> AppResult<Table> {
    if !table.is_running {
        return Err(AppError::TableNotRunning(table.id.clone()));
    }
    if from_seat == to_seat {
        return Err(AppError::TransferConflict(
            "source and destination are the same seat".to_string(),
        ));
    }

    let from = seat_ref(table, from_seat)?;
    let to = seat_ref(table, to_seat)?;

    if !from.is_occupied() {
        return Err(AppError::TransferConflict(format!(
            "seat {} is no longer occupied",
            from_seat
        )));
    }
    if to.status != SeatStatus::Idle {
        return Err(AppError::TransferConflict(format!(
            "seat {} is no longer free",
            to_seat
        )));
    }

    let member = from.member.clone();
    let carried = from.buy_in;
    let record = close_session(
        from,
        &table.id,
        &table.name,
        now,
        BuyInValue::TransferOut(to_seat),
        Some(TransferNote::To(to_seat)),
    );

    let mut t = table.clone();
    if let Some(r) = record {
        t.ledger.push(r);
    }
    if let Some(s) = t.seat_mut(from_seat) {
        s.reset_to_idle();
    }
    if let Some(s) = t.seat_mut(to_seat) {
        s.member = member;
        s.status = SeatStatus::Seated;
        s.active_seconds = 0;
        s.rest_seconds = 0;
        s.last_active_start = Some(now);
        s.last_rest_start = None;
        s.session_start = Some(now);
        s.transfer_from = Some(from_seat);
        s.buy_in += carried;
    }
    Ok(t)
}

/// Move a seated member to rest. No-op unless the seat is seated.
pub fn rest(table: &Table, seat_id: u8, now: DateTime<Local>) -> AppResult<Table> {
    let seat = seat_ref(table, seat_id)?;
    if seat.status != SeatStatus::Seated {
        return Ok(table.clone());
    }

    let mut t = table.clone();
    if let Some(s) = t.seat_mut(seat_id) {
        s.active_seconds = s.active_seconds_at(now);
        s.last_active_start = None;
        s.last_rest_start = Some(now);
        s.status = SeatStatus::Rest;
    }
    Ok(t)
}

/// Vacate a seat: fold the open interval, deposit one session record, and
/// reset the seat to its idle defaults. No-op if already idle.
pub fn leave(table: &Table, seat_id: u8, now: DateTime<Local>) -> AppResult<Table> {
    let seat = seat_ref(table, seat_id)?;
    if seat.status == SeatStatus::Idle {
        return Ok(table.clone());
    }

    let record = close_session(
        seat,
        &table.id,
        &table.name,
        now,
        BuyInValue::Amount(seat.buy_in),
        seat.transfer_from.map(TransferNote::From),
    );

    let mut t = table.clone();
    if let Some(r) = record {
        t.ledger.push(r);
    }
    if let Some(s) = t.seat_mut(seat_id) {
        s.reset_to_idle();
    }
    Ok(t)
}

/// Add chips to a seat's running buy-in. Works in any status; negative
/// amounts contribute nothing (the buy-in never decreases mid-session).
pub fn add_buy_in(table: &Table, seat_id: u8, amount: f64) -> AppResult<Table> {
    if !amount.is_finite() {
        return Err(AppError::InvalidAmount(amount.to_string()));
    }
    seat_ref(table, seat_id)?;

    let mut t = table.clone();
    if let Some(s) = t.seat_mut(seat_id) {
        s.buy_in += amount.max(0.0);
    }
    Ok(t)
}

fn seat_ref<'a>(table: &'a Table, seat_id: u8) -> AppResult<&'a crate::models::Seat> {
    table
        .seat(seat_id)
        .ok_or_else(|| AppError::InvalidSeat(seat_id.to_string()))
}
