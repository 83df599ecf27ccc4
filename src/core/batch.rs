//! Atomic multi-seat operations.
//!
//! A batch validates every selected seat before mutating any of them, so a
//! rejected batch leaves the table exactly as it was.

use crate::core::seats;
use crate::errors::{AppError, AppResult};
use crate::models::{SeatStatus, Table};
use chrono::{DateTime, Local};

/// Seat every selected seat under the member name already written on it,
/// adding the same buy-in to each (already seated seats get the buy-in
/// only). Any empty name, or a name that collides with an occupied or
/// co-selected seat outside itself, rejects the whole batch; batches never
/// transfer.
pub fn batch_seat(
    table: &Table,
    seat_ids: &[u8],
    amount: f64,
    now: DateTime<Local>,
) -> AppResult<Table> {
    if !table.is_running {
        return Err(AppError::TableNotRunning(table.id.clone()));
    }
    if seat_ids.is_empty() {
        return Err(AppError::NothingSelected);
    }
    if !amount.is_finite() {
        return Err(AppError::InvalidAmount(amount.to_string()));
    }

    let mut ids = seat_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    // validate everything before touching the table
    for &id in &ids {
        let seat = table
            .seat(id)
            .ok_or_else(|| AppError::InvalidSeat(id.to_string()))?;

        let member = seat.member.trim();
        if member.is_empty() {
            return Err(AppError::EmptyMember {
                table: table.id.clone(),
                seat: id,
            });
        }

        for other in &table.seats {
            if other.id == id || other.member.trim() != member {
                continue;
            }
            if other.is_occupied() || ids.contains(&other.id) {
                return Err(AppError::DuplicateMember {
                    member: member.to_string(),
                    seat: other.id,
                });
            }
        }
    }

    let mut t = table.clone();
    for &id in &ids {
        if let Some(s) = t.seat_mut(id) {
            match s.status {
                SeatStatus::Seated => {}
                SeatStatus::Rest => {
                    // freeze the rest interval; the session continues
                    s.rest_seconds = s.rest_seconds_at(now);
                    s.last_rest_start = None;
                    s.status = SeatStatus::Seated;
                    s.last_active_start = Some(now);
                }
                SeatStatus::Idle => {
                    s.active_seconds = 0;
                    s.rest_seconds = 0;
                    s.session_start = Some(now);
                    s.status = SeatStatus::Seated;
                    s.last_active_start = Some(now);
                }
            }
            s.buy_in += amount.max(0.0);
            s.selected = true;
        }
    }
    Ok(t)
}

/// Vacate several seats at once. Idle seats in the selection are skipped;
/// each occupied one closes its session and deposits a record.
pub fn batch_leave(table: &Table, seat_ids: &[u8], now: DateTime<Local>) -> AppResult<Table> {
    if seat_ids.is_empty() {
        return Err(AppError::NothingSelected);
    }

    let mut ids = seat_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    for &id in &ids {
        if table.seat(id).is_none() {
            return Err(AppError::InvalidSeat(id.to_string()));
        }
    }

    let mut t = table.clone();
    for &id in &ids {
        let occupied = t.seat(id).map(|s| s.is_occupied()).unwrap_or(false);
        if occupied {
            t = seats::leave(&t, id, now)?;
        }
    }
    Ok(t)
}
