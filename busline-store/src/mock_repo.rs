use async_trait::async_trait;
use busline_core::repository::TripProvider;
use busline_core::search::{SeatLayout, Trip};
use busline_core::{CoreError, CoreResult};
use std::collections::HashMap;

pub const STANDARD_SEAT_COUNT: u32 = 40;
pub const STANDARD_BOOKED: [u32; 7] = [5, 12, 18, 23, 27, 31, 34];
pub const STANDARD_PENDING: [u32; 3] = [8, 15, 22];

/// Fixed in-memory roster standing in for an inventory service.
///
/// Every visit sees the same trips and the same seat classification.
pub struct MockTripProvider {
    trips: Vec<Trip>,
    layouts: HashMap<u32, SeatLayout>,
}

impl MockTripProvider {
    pub fn new(trips: Vec<Trip>, layouts: HashMap<u32, SeatLayout>) -> Self {
        Self { trips, layouts }
    }

    /// The demo roster: three Dhaka → Chittagong coaches and one Colombo → Kandy coach.
    pub fn seeded() -> Self {
        let trips = vec![
            trip(1, "Green Line", "Dhaka", "Chittagong", "8:00 AM", "2:00 PM", 800, "BDT", "01711-123456"),
            trip(2, "Shyamoli Paribahan", "Dhaka", "Chittagong", "10:30 AM", "4:30 PM", 750, "BDT", "01722-234567"),
            trip(3, "Ena Transport", "Dhaka", "Chittagong", "2:00 PM", "8:00 PM", 850, "BDT", "01733-345678"),
            trip(4, "Sri Lanka Transport Board", "Colombo", "Kandy", "8:00 AM", "11:30 AM", 450, "LKR", "011-2581120"),
        ];

        let layouts = trips
            .iter()
            .map(|t| (t.id, standard_layout()))
            .collect();

        Self::new(trips, layouts)
    }
}

impl Default for MockTripProvider {
    fn default() -> Self {
        Self::seeded()
    }
}

pub fn standard_layout() -> SeatLayout {
    SeatLayout::new(STANDARD_SEAT_COUNT, STANDARD_BOOKED.to_vec(), STANDARD_PENDING.to_vec())
}

#[allow(clippy::too_many_arguments)]
fn trip(
    id: u32,
    company: &str,
    from: &str,
    to: &str,
    departure_time: &str,
    arrival_time: &str,
    price_per_seat: i32,
    currency: &str,
    contact: &str,
) -> Trip {
    Trip {
        id,
        company: company.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        departure_time: departure_time.to_string(),
        arrival_time: arrival_time.to_string(),
        price_per_seat,
        currency: currency.to_string(),
        contact: contact.to_string(),
    }
}

#[async_trait]
impl TripProvider for MockTripProvider {
    async fn list_trips(&self) -> CoreResult<Vec<Trip>> {
        Ok(self.trips.clone())
    }

    async fn get_trip(&self, trip_id: u32) -> CoreResult<Trip> {
        self.trips
            .iter()
            .find(|t| t.id == trip_id)
            .cloned()
            .ok_or(CoreError::TripNotFound(trip_id))
    }

    async fn seat_layout(&self, trip_id: u32) -> CoreResult<SeatLayout> {
        self.layouts
            .get(&trip_id)
            .cloned()
            .ok_or(CoreError::TripNotFound(trip_id))
    }
}
