use crate::utils::time::elapsed_seconds;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Idle,
    Seated,
    Rest,
}

impl SeatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Idle => "idle",
            SeatStatus::Seated => "seated",
            SeatStatus::Rest => "rest",
        }
    }

    /// Seated or resting: the seat belongs to somebody.
    pub fn is_occupied(&self) -> bool {
        matches!(self, SeatStatus::Seated | SeatStatus::Rest)
    }
}

/// One of the nine numbered seats of a table.
///
/// Exactly one of the following holds at any time:
/// - `Idle` with both anchors `None`
/// - `Seated` with `last_active_start` set
/// - `Rest` with `last_rest_start` set
///
/// `active_seconds`/`rest_seconds` are frozen snapshots; the open interval
/// (if any) is projected on top of them via the anchor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub id: u8,
    #[serde(default)]
    pub member: String,
    pub status: SeatStatus,
    pub active_seconds: i64,
    pub rest_seconds: i64,
    pub last_active_start: Option<DateTime<Local>>,
    pub last_rest_start: Option<DateTime<Local>>,
    pub buy_in: f64,
    /// Set when the current session was opened by a transfer from another
    /// seat; carried into the closing session record.
    pub transfer_from: Option<u8>,
    /// When the current uninterrupted session began (first sit-down).
    pub session_start: Option<DateTime<Local>>,
    /// Batch-selection marker. UI state only, never persisted.
    #[serde(skip)]
    pub selected: bool,
}

impl Seat {
    pub fn idle(id: u8) -> Self {
        Self {
            id,
            member: String::new(),
            status: SeatStatus::Idle,
            active_seconds: 0,
            rest_seconds: 0,
            last_active_start: None,
            last_rest_start: None,
            buy_in: 0.0,
            transfer_from: None,
            session_start: None,
            selected: false,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.status.is_occupied()
    }

    /// Active seconds including the open seated interval, if any.
    pub fn active_seconds_at(&self, now: DateTime<Local>) -> i64 {
        match self.last_active_start {
            Some(anchor) => self.active_seconds + elapsed_seconds(anchor, now),
            None => self.active_seconds,
        }
    }

    /// Rest seconds including the open rest interval, if any.
    pub fn rest_seconds_at(&self, now: DateTime<Local>) -> i64 {
        match self.last_rest_start {
            Some(anchor) => self.rest_seconds + elapsed_seconds(anchor, now),
            None => self.rest_seconds,
        }
    }

    /// Total projected session length (active + rest).
    pub fn session_seconds_at(&self, now: DateTime<Local>) -> i64 {
        self.active_seconds_at(now) + self.rest_seconds_at(now)
    }

    /// Back to empty idle defaults. Keeps only the seat number.
    pub fn reset_to_idle(&mut self) {
        *self = Seat::idle(self.id);
    }
}
