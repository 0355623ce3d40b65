use std::collections::HashSet;
use std::fmt;
use serde::{Deserialize, Serialize};
use busline_core::SeatLayout;
use crate::pricing::{self, BookingTotals, Summary};
use crate::seat::{initialize_seats, Seat, SeatStatus};

/// Seats the viewer has picked, in click order.
///
/// The vector keeps display order ("3, 7, 1"); the set answers membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatSelection {
    order: Vec<u32>,
    members: HashSet<u32>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, seat_id: u32) -> bool {
        self.members.contains(&seat_id)
    }

    /// Selected ids in the order they were picked.
    pub fn ids(&self) -> &[u32] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// "3, 7, 1" style line for the confirm panel.
    pub fn display(&self) -> String {
        self.order
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn insert(&mut self, seat_id: u32) {
        if self.members.insert(seat_id) {
            self.order.push(seat_id);
        }
    }

    fn remove(&mut self, seat_id: u32) {
        if self.members.remove(&seat_id) {
            self.order.retain(|id| *id != seat_id);
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToggleOutcome {
    Selected,
    Deselected,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnavailableReason {
    Booked,
    Pending,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::Booked => write!(f, "This seat is already booked"),
            UnavailableReason::Pending => write!(f, "This seat is being reserved by someone else"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("Seat not found: {0}")]
    NotFound(u32),

    #[error("{0}")]
    Unavailable(UnavailableReason),

    #[error("Please select at least one seat")]
    EmptySelection,
}

/// Flip `seat_id` in `selection`.
///
/// Booked and pending seats are refused and leave the selection as it was.
pub fn toggle_seat(
    selection: &mut SeatSelection,
    seats: &[Seat],
    seat_id: u32,
) -> Result<ToggleOutcome, SeatError> {
    let seat = seats
        .iter()
        .find(|seat| seat.id == seat_id)
        .ok_or(SeatError::NotFound(seat_id))?;

    match seat.status {
        SeatStatus::Booked => Err(SeatError::Unavailable(UnavailableReason::Booked)),
        SeatStatus::Pending => Err(SeatError::Unavailable(UnavailableReason::Pending)),
        SeatStatus::Available if selection.contains(seat_id) => {
            selection.remove(seat_id);
            Ok(ToggleOutcome::Deselected)
        }
        SeatStatus::Available => {
            selection.insert(seat_id);
            Ok(ToggleOutcome::Selected)
        }
    }
}

/// Seat roster of one trip together with the viewer's current pick.
#[derive(Debug, Clone)]
pub struct SeatInventory {
    seats: Vec<Seat>,
    selection: SeatSelection,
    price_per_seat: i32,
}

impl SeatInventory {
    pub fn new(seats: Vec<Seat>, price_per_seat: i32) -> Self {
        Self {
            seats,
            selection: SeatSelection::new(),
            price_per_seat,
        }
    }

    pub fn from_layout(layout: &SeatLayout, price_per_seat: i32) -> Self {
        Self::new(
            initialize_seats(layout.total, &layout.booked, &layout.pending),
            price_per_seat,
        )
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn selection(&self) -> &SeatSelection {
        &self.selection
    }

    pub fn toggle(&mut self, seat_id: u32) -> Result<ToggleOutcome, SeatError> {
        toggle_seat(&mut self.selection, &self.seats, seat_id)
    }

    pub fn summary(&self) -> Summary {
        pricing::compute_summary(&self.seats, &self.selection, self.price_per_seat)
    }

    pub fn confirm(&self) -> Result<BookingTotals, SeatError> {
        pricing::confirm_booking(&self.selection, self.price_per_seat)
    }
}
