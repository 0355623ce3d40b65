pub mod search;
pub mod repository;
pub mod registration;

pub use search::{RouteQuery, SeatLayout, Trip, TripListing};
pub use repository::TripProvider;
pub use registration::{BusRegistration, RegistrationReceipt};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Trip not found: {0}")]
    TripNotFound(u32),
}

pub type CoreResult<T> = Result<T, CoreError>;
