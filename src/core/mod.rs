pub mod batch;
pub mod clock;
pub mod seats;
pub mod session;
