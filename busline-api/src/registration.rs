use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Serialize;
use busline_core::registration::{validate_registration, BusRegistration, RegistrationReceipt};
use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize)]
struct RegistrationResponse {
    #[serde(flatten)]
    receipt: RegistrationReceipt,
    message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/registrations", post(register_bus))
}

/// POST /v1/registrations
async fn register_bus(
    State(state): State<AppState>,
    Json(req): Json<BusRegistration>,
) -> Result<(StatusCode, Json<RegistrationResponse>), AppError> {
    let receipt = validate_registration(&req, &state.business_rules.registration_seat_options)?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            receipt,
            message: "Bus registered successfully!".to_string(),
        }),
    ))
}
