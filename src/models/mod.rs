pub mod seat;
pub mod session;
pub mod table;

pub use seat::{Seat, SeatStatus};
pub use session::{BuyInValue, SessionRecord, TransferNote};
pub use table::{SEATS_PER_TABLE, Table};
