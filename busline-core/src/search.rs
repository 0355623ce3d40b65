use serde::{Deserialize, Serialize};
use crate::{CoreError, CoreResult};

/// Cities offered by the route picker when nothing else is configured.
pub const DEFAULT_CITIES: [&str; 10] = [
    "Colombo",
    "Kandy",
    "Galle",
    "Jaffna",
    "Trincomalee",
    "Anuradhapura",
    "Matara",
    "Negombo",
    "Batticaloa",
    "Nuwara Eliya",
];

/// One scheduled bus journey. Read-only for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trip {
    pub id: u32,
    pub company: String,
    pub from: String,
    pub to: String,
    pub departure_time: String, // Display string, e.g. "8:00 AM"
    pub arrival_time: String,
    pub price_per_seat: i32,
    pub currency: String,
    pub contact: String,
}

/// Static seat classification for a trip, as supplied by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatLayout {
    pub total: u32,
    pub booked: Vec<u32>,
    pub pending: Vec<u32>,
}

impl SeatLayout {
    pub fn new(total: u32, booked: Vec<u32>, pending: Vec<u32>) -> Self {
        Self { total, booked, pending }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteQuery {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

impl RouteQuery {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }

    /// Both ends must be filled in and must differ.
    pub fn validate(&self) -> CoreResult<()> {
        let from = self.from.trim();
        let to = self.to.trim();

        if from.is_empty() || to.is_empty() {
            return Err(CoreError::ValidationError(
                "Both departure and destination cities are required".to_string(),
            ));
        }
        if from == to {
            return Err(CoreError::ValidationError(
                "Departure and destination cities must differ".to_string(),
            ));
        }
        Ok(())
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        trip.from == self.from.trim() && trip.to == self.to.trim()
    }
}

/// A trip as shown in the route listing.
#[derive(Debug, Clone, Serialize)]
pub struct TripListing {
    #[serde(flatten)]
    pub trip: Trip,
    pub available_seats: usize,
}

/// Keeps trips running on the queried route, in roster order.
pub fn filter_trips<'a, I>(trips: I, query: &RouteQuery) -> Vec<Trip>
where
    I: IntoIterator<Item = &'a Trip>,
{
    trips
        .into_iter()
        .filter(|trip| query.matches(trip))
        .cloned()
        .collect()
}

/// Destination choices once `origin` is picked: every other city.
pub fn destinations_from<'a>(cities: &'a [String], origin: &str) -> Vec<&'a str> {
    cities
        .iter()
        .map(String::as_str)
        .filter(|city| *city != origin)
        .collect()
}

pub fn default_cities() -> Vec<String> {
    DEFAULT_CITIES.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: u32, from: &str, to: &str) -> Trip {
        Trip {
            id,
            company: format!("Company {}", id),
            from: from.to_string(),
            to: to.to_string(),
            departure_time: "8:00 AM".to_string(),
            arrival_time: "2:00 PM".to_string(),
            price_per_seat: 800,
            currency: "LKR".to_string(),
            contact: "01711-123456".to_string(),
        }
    }

    #[test]
    fn test_route_query_deserialization() {
        let json = r#"{ "from": "Colombo", "to": "Kandy" }"#;
        let query: RouteQuery = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(query.from, "Colombo");
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_route_query_rejects_missing_or_same_city() {
        assert!(RouteQuery::new("", "Kandy").validate().is_err());
        assert!(RouteQuery::new("Colombo", "   ").validate().is_err());
        assert!(RouteQuery::new("Galle", "Galle").validate().is_err());
    }

    #[test]
    fn test_filter_trips_keeps_roster_order() {
        let trips = vec![
            trip(1, "Dhaka", "Chittagong"),
            trip(2, "Colombo", "Kandy"),
            trip(3, "Dhaka", "Chittagong"),
        ];

        let found = filter_trips(&trips, &RouteQuery::new("Dhaka", "Chittagong"));
        let ids: Vec<u32> = found.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);

        // Direction matters
        assert!(filter_trips(&trips, &RouteQuery::new("Chittagong", "Dhaka")).is_empty());
    }

    #[test]
    fn test_destinations_exclude_origin() {
        let cities = default_cities();
        let destinations = destinations_from(&cities, "Colombo");
        assert_eq!(destinations.len(), cities.len() - 1);
        assert!(!destinations.contains(&"Colombo"));
        assert!(destinations.contains(&"Kandy"));
    }

    #[test]
    fn test_listing_flattens_trip() {
        let listing = TripListing { trip: trip(7, "Colombo", "Galle"), available_seats: 30 };
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["available_seats"], 30);
    }
}
