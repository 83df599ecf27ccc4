use super::seat::{Seat, SeatStatus};
use super::session::SessionRecord;
use crate::utils::time::elapsed_seconds;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Seats are fixed per table; the list is never resized.
pub const SEATS_PER_TABLE: usize = 9;

/// One physical poker table: the table clock plus nine seats and the
/// append-only ledger of closed sessions.
///
/// Clock invariant: while `is_running`, `last_start_time` is set and the true
/// elapsed time is `elapsed_seconds` plus the open interval; while stopped,
/// `elapsed_seconds` alone is authoritative and the anchor is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub blinds: String,
    pub opened_at: Option<String>,
    pub closed_at: Option<String>,
    pub is_running: bool,
    pub last_start_time: Option<DateTime<Local>>,
    pub elapsed_seconds: i64,
    pub seats: Vec<Seat>,
    pub ledger: Vec<SessionRecord>,
}

impl Table {
    /// A stopped table with nine idle seats and an empty ledger.
    pub fn fresh(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            blinds: String::new(),
            opened_at: None,
            closed_at: None,
            is_running: false,
            last_start_time: None,
            elapsed_seconds: 0,
            seats: (1..=SEATS_PER_TABLE as u8).map(Seat::idle).collect(),
            ledger: Vec::new(),
        }
    }

    pub fn seat(&self, seat_id: u8) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == seat_id)
    }

    pub fn seat_mut(&mut self, seat_id: u8) -> Option<&mut Seat> {
        self.seats.iter_mut().find(|s| s.id == seat_id)
    }

    pub fn seated_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.status == SeatStatus::Seated)
            .count()
    }

    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }

    /// The at-most-one *other* seat currently occupied by `member`.
    /// Scope is this table only.
    pub fn occupied_seat_of(&self, member: &str, exclude_seat: u8) -> Option<&Seat> {
        self.seats
            .iter()
            .find(|s| s.id != exclude_seat && s.is_occupied() && s.member == member)
    }

    /// Projected running time of the table clock at `now`.
    pub fn elapsed_at(&self, now: DateTime<Local>) -> i64 {
        match (self.is_running, self.last_start_time) {
            (true, Some(anchor)) => self.elapsed_seconds + elapsed_seconds(anchor, now),
            _ => self.elapsed_seconds,
        }
    }
}
