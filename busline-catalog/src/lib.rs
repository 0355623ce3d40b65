pub mod seat;
pub mod pricing;
pub mod inventory;

pub use seat::{initialize_seats, Seat, SeatStatus, DEFAULT_SEAT_COLUMNS};
pub use pricing::{compute_summary, confirm_booking, BookingTotals, Summary};
pub use inventory::{toggle_seat, SeatError, SeatInventory, SeatSelection, ToggleOutcome, UnavailableReason};
