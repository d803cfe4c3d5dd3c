use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::registrations::adapters::inbound::http::respond;
use crate::modules::registrations::core::tickets::{
    Accommodation, AgeCategory, StayDuration, SupporterCategory,
};
use crate::modules::registrations::use_cases::register::command::{ParticipantRequest, RegisterAttendees};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantBody {
    pub participant_id: Option<Uuid>,
    pub age_category: AgeCategory,
    pub duration: StayDuration,
    pub accommodation: Accommodation,
    pub supporter_category: SupporterCategory,
    pub birthday: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
    pub registration_id: Option<Uuid>,
    pub email: String,
    #[serde(default)]
    pub comment: String,
    pub participants: Vec<ParticipantBody>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterAttendees {
        registration_id: body.registration_id.unwrap_or_else(Uuid::now_v7),
        email: body.email,
        comment: body.comment,
        participants: body
            .participants
            .into_iter()
            .map(|p| ParticipantRequest {
                participant_id: p.participant_id.unwrap_or_else(Uuid::now_v7),
                age_category: p.age_category,
                duration: p.duration,
                accommodation: p.accommodation,
                supporter_category: p.supporter_category,
                birthday: p.birthday,
            })
            .collect(),
    };

    let result = state.ledger.register(command).await;
    respond(result.map(|outcome| outcome.map(Some)), StatusCode::CREATED)
}
