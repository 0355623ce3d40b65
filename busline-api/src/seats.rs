use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;
use busline_catalog::{SeatStatus, Summary, ToggleOutcome};
use busline_core::Trip;
use busline_order::{BookingConfirmation, SeatSession};
use crate::{error::AppError, extract::Path, state::AppState};

#[derive(Debug, Serialize)]
struct SeatView {
    id: u32,
    label: String,
    status: SeatStatus,
    selected: bool,
    row: u32,
    column: u32,
}

#[derive(Debug, Serialize)]
struct SessionView {
    session_id: Uuid,
    trip: Trip,
    seats: Vec<SeatView>,
    selected_seats: Vec<u32>,
    selected_display: String,
    summary: Summary,
}

impl SessionView {
    fn build(session: &SeatSession, columns: u32) -> Self {
        let selection = session.selection();
        let seats = session
            .inventory
            .seats()
            .iter()
            .map(|seat| {
                let (row, column) = seat.grid_position(columns);
                SeatView {
                    id: seat.id,
                    label: seat.label.clone(),
                    status: seat.status,
                    selected: selection.contains(seat.id),
                    row,
                    column,
                }
            })
            .collect();

        Self {
            session_id: session.id,
            trip: session.trip.clone(),
            seats,
            selected_seats: selection.ids().to_vec(),
            selected_display: selection.display(),
            summary: session.summary(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ToggleResponse {
    seat_id: u32,
    outcome: ToggleOutcome,
    selected_seats: Vec<u32>,
    summary: Summary,
}

#[derive(Debug, Serialize)]
struct ConfirmResponse {
    #[serde(flatten)]
    confirmation: BookingConfirmation,
    message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/trips/{trip_id}/sessions", post(open_session))
        .route("/v1/sessions/{session_id}", get(get_session).delete(close_session))
        .route("/v1/sessions/{session_id}/seats/{seat_id}", post(toggle_seat))
        .route("/v1/sessions/{session_id}/confirm", post(confirm_session))
}

/// POST /v1/trips/:trip_id/sessions
async fn open_session(
    State(state): State<AppState>,
    Path(trip_id): Path<u32>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let trip = state.trips.get_trip(trip_id).await?;
    let layout = state.trips.seat_layout(trip_id).await?;

    let session = state.sessions.write().await.open(trip, &layout);

    Ok((
        StatusCode::CREATED,
        Json(SessionView::build(&session, state.business_rules.seat_columns)),
    ))
}

/// GET /v1/sessions/:session_id
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| AppError::NotFoundError(format!("Session not found: {}", session_id)))?;

    Ok(Json(SessionView::build(session, state.business_rules.seat_columns)))
}

/// POST /v1/sessions/:session_id/seats/:seat_id
async fn toggle_seat(
    State(state): State<AppState>,
    Path((session_id, seat_id)): Path<(Uuid, u32)>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut sessions = state.sessions.write().await;
    let outcome = sessions.toggle(&session_id, seat_id)?;

    let session = sessions
        .get(&session_id)
        .ok_or_else(|| AppError::InternalServerError(format!("Session {} vanished mid-toggle", session_id)))?;

    Ok(Json(ToggleResponse {
        seat_id,
        outcome,
        selected_seats: session.selection().ids().to_vec(),
        summary: session.summary(),
    }))
}

/// POST /v1/sessions/:session_id/confirm
async fn confirm_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ConfirmResponse>, AppError> {
    let confirmation = state.sessions.write().await.confirm(&session_id)?;
    let message = confirmation.message(state.business_rules.symbol_for(&confirmation.currency));

    Ok(Json(ConfirmResponse { confirmation, message }))
}

/// DELETE /v1/sessions/:session_id
async fn close_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.write().await.close(&session_id)?;
    Ok(StatusCode::NO_CONTENT)
}
