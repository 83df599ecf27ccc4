pub mod colors;
pub mod formatting;
pub mod grid;
pub mod path;
pub mod time;

pub use formatting::format_amount;
pub use time::format_hms;
