use crate::utils::formatting::format_amount;
use serde::{Deserialize, Serialize};

/// Direction of a seat transfer, as seen from the record's own seat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "dir", content = "seat", rename_all = "lowercase")]
pub enum TransferNote {
    /// Session ended because the member moved to the given seat.
    To(u8),
    /// Session began because the member moved in from the given seat.
    From(u8),
}

impl TransferNote {
    pub fn display(&self) -> String {
        match self {
            TransferNote::To(seat) => format!("moved to seat {}", seat),
            TransferNote::From(seat) => format!("moved from seat {}", seat),
        }
    }
}

/// What the buy-in column of a session record shows: a real amount, or a
/// transfer marker when the chips followed the member to another seat.
/// Only `Amount` rows count toward the export total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum BuyInValue {
    Amount(f64),
    TransferOut(u8),
}

impl BuyInValue {
    pub fn display(&self) -> String {
        match self {
            BuyInValue::Amount(v) => format_amount(*v),
            BuyInValue::TransferOut(seat) => format!("moved to seat {}", seat),
        }
    }

    pub fn numeric(&self) -> Option<f64> {
        match self {
            BuyInValue::Amount(v) => Some(*v),
            BuyInValue::TransferOut(_) => None,
        }
    }
}

/// Immutable ledger entry closing one seating session.
/// Appended exactly once when a seat is vacated; never edited afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    pub table_id: String,
    pub table_name: String,
    pub seat_id: u8,
    pub member: String,
    pub started_at: String,
    pub ended_at: String,
    pub active_seconds: i64,
    pub rest_seconds: i64,
    pub buy_in: BuyInValue,
    pub transfer: Option<TransferNote>,
}

impl SessionRecord {
    /// Session length as recorded (active + rest), for the HH:MM:SS column.
    pub fn duration_seconds(&self) -> i64 {
        self.active_seconds + self.rest_seconds
    }

    /// Date part of the session end, e.g. `2025-06-01`.
    pub fn ended_date(&self) -> &str {
        self.ended_at.get(..10).unwrap_or(&self.ended_at)
    }
}
