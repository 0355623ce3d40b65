use std::collections::HashSet;
use serde::{Deserialize, Serialize};

/// Seats per grid row on a standard coach (2 + aisle + 2).
pub const DEFAULT_SEAT_COLUMNS: u32 = 4;

/// Classification of a seat when the roster is loaded. Selection never changes it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    Available,
    Booked,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub id: u32,
    pub label: String,
    pub status: SeatStatus,
}

impl Seat {
    pub fn new(id: u32, status: SeatStatus) -> Self {
        Self {
            id,
            label: id.to_string(),
            status,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }

    /// Zero-based (row, column) in a row-major grid of `columns` seats per row.
    pub fn grid_position(&self, columns: u32) -> (u32, u32) {
        let columns = columns.max(1);
        let index = self.id.saturating_sub(1);
        (index / columns, index % columns)
    }
}

/// Build the roster for a trip: ids `1..=total` in ascending order.
///
/// Booked is applied first and pending second, so an id listed in both ends
/// up pending. Ids outside the roster are ignored.
pub fn initialize_seats(total: u32, booked_ids: &[u32], pending_ids: &[u32]) -> Vec<Seat> {
    let booked: HashSet<u32> = booked_ids.iter().copied().collect();
    let pending: HashSet<u32> = pending_ids.iter().copied().collect();

    (1..=total)
        .map(|id| {
            let mut status = SeatStatus::Available;
            if booked.contains(&id) {
                status = SeatStatus::Booked;
            }
            if pending.contains(&id) {
                status = SeatStatus::Pending;
            }
            Seat::new(id, status)
        })
        .collect()
}
