use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use busline_catalog::{compute_summary, initialize_seats, SeatSelection};
use busline_core::search::{destinations_from, filter_trips, RouteQuery, TripListing};
use tracing::info;
use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
struct CitiesQuery {
    from: Option<String>,
}

#[derive(Debug, Serialize)]
struct CitiesResponse {
    cities: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TripSearchResponse {
    from: String,
    to: String,
    count: usize,
    trips: Vec<TripListing>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/cities", get(list_cities))
        .route("/v1/trips", get(search_trips))
}

/// GET /v1/cities?from=Colombo
async fn list_cities(
    State(state): State<AppState>,
    Query(query): Query<CitiesQuery>,
) -> Json<CitiesResponse> {
    let cities = match query.from.as_deref() {
        Some(origin) => destinations_from(&state.cities, origin)
            .into_iter()
            .map(str::to_string)
            .collect(),
        None => (*state.cities).clone(),
    };

    Json(CitiesResponse { cities })
}

/// GET /v1/trips?from=Dhaka&to=Chittagong
async fn search_trips(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<TripSearchResponse>, AppError> {
    query.validate()?;

    let roster = state.trips.list_trips().await?;
    let matching = filter_trips(&roster, &query);

    let mut trips = Vec::with_capacity(matching.len());
    for trip in matching {
        // Derived from the same layout the seat map uses, so both screens agree
        let layout = state.trips.seat_layout(trip.id).await?;
        let seats = initialize_seats(layout.total, &layout.booked, &layout.pending);
        let available_seats = compute_summary(&seats, &SeatSelection::new(), trip.price_per_seat).available_count;

        trips.push(TripListing { trip, available_seats });
    }

    info!("Route search {} -> {}: {} trips", query.from, query.to, trips.len());

    Ok(Json(TripSearchResponse {
        from: query.from.trim().to_string(),
        to: query.to.trim().to_string(),
        count: trips.len(),
        trips,
    }))
}
