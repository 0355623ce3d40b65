use serde::{Deserialize, Serialize};
use crate::inventory::{SeatError, SeatSelection};
use crate::seat::{Seat, SeatStatus};

/// Legend counts for the seat map plus the running total of the pick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    /// Counted over the whole roster, selected seats included
    pub available_count: usize,
    pub booked_count: usize,
    pub pending_count: usize,
    pub selected_count: usize,
    pub total_price: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingTotals {
    pub seat_count: usize,
    pub total_price: i64,
}

/// Flat fare: every selected seat costs `price_per_seat`.
pub fn selection_price(selected_count: usize, price_per_seat: i32) -> i64 {
    selected_count as i64 * price_per_seat as i64
}

pub fn compute_summary(seats: &[Seat], selection: &SeatSelection, price_per_seat: i32) -> Summary {
    let count = |status: SeatStatus| seats.iter().filter(|seat| seat.status == status).count();
    let selected_count = selection.len();

    Summary {
        available_count: count(SeatStatus::Available),
        booked_count: count(SeatStatus::Booked),
        pending_count: count(SeatStatus::Pending),
        selected_count,
        total_price: selection_price(selected_count, price_per_seat),
    }
}

/// Local confirmation only: seats are not re-checked or marked booked.
pub fn confirm_booking(selection: &SeatSelection, price_per_seat: i32) -> Result<BookingTotals, SeatError> {
    if selection.is_empty() {
        return Err(SeatError::EmptySelection);
    }

    Ok(BookingTotals {
        seat_count: selection.len(),
        total_price: selection_price(selection.len(), price_per_seat),
    })
}
