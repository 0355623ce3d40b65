use async_trait::async_trait;
use crate::search::{SeatLayout, Trip};
use crate::CoreResult;

/// Source of trips and their seat classifications.
///
/// The seat tracker only ever sees what this hands out, so a mock roster and
/// a real inventory service are interchangeable behind it.
#[async_trait]
pub trait TripProvider: Send + Sync {
    async fn list_trips(&self) -> CoreResult<Vec<Trip>>;

    /// `CoreError::TripNotFound` when the id is unknown.
    async fn get_trip(&self, trip_id: u32) -> CoreResult<Trip>;

    async fn seat_layout(&self, trip_id: u32) -> CoreResult<SeatLayout>;
}
