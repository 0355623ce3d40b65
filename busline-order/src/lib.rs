pub mod models;
pub mod manager;

pub use models::{BookingConfirmation, SeatSession};
pub use manager::{SessionError, SessionManager, DEFAULT_IDLE_SECONDS};
