use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::registrations::adapters::inbound::http::respond;
use crate::modules::registrations::core::tickets::Accommodation;
use crate::modules::registrations::use_cases::change_accommodation::command::ChangeAccommodation;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ChangeAccommodationBody {
    pub accommodation: Accommodation,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(participant_id): Path<Uuid>,
    body: Result<Json<ChangeAccommodationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let result = state
        .ledger
        .change_accommodation(ChangeAccommodation {
            participant_id,
            accommodation: body.accommodation,
        })
        .await;
    respond(result.map(|outcome| outcome.map(|_| None)), StatusCode::OK)
}
