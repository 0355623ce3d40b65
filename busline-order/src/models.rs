use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Duration, Utc};
use busline_catalog::{SeatInventory, SeatSelection, Summary};
use busline_core::{SeatLayout, Trip};

/// One viewer's seat-selection context for one trip.
///
/// Lives from the moment the seat map is opened until it is confirmed, closed
/// or left idle past the manager's timeout.
#[derive(Debug, Clone)]
pub struct SeatSession {
    pub id: Uuid,
    pub trip: Trip,
    pub inventory: SeatInventory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SeatSession {
    pub fn new(trip: Trip, layout: &SeatLayout) -> Self {
        let now = Utc::now();
        let inventory = SeatInventory::from_layout(layout, trip.price_per_seat);
        Self {
            id: Uuid::new_v4(),
            trip,
            inventory,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn selection(&self) -> &SeatSelection {
        self.inventory.selection()
    }

    pub fn summary(&self) -> Summary {
        self.inventory.summary()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// No activity for at least `timeout` as of `now`.
    pub fn is_idle(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        now - self.updated_at >= timeout
    }
}

/// Outcome of a confirmed selection. Nothing downstream consumes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfirmation {
    pub booking_id: Uuid,
    pub trip_id: u32,
    pub seat_count: usize,
    pub seat_ids: Vec<u32>,
    pub total_price: i64,
    pub currency: String,
    pub confirmed_at: DateTime<Utc>,
}

impl BookingConfirmation {
    /// Toast text shown after confirming, e.g. "Successfully booked 2 seat(s)! Total: Rs. 900"
    pub fn message(&self, currency_symbol: &str) -> String {
        format!(
            "Successfully booked {} seat(s)! Total: {} {}",
            self.seat_count, currency_symbol, self.total_price
        )
    }
}
