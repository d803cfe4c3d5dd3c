use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::registrations::adapters::inbound::http::respond;
use crate::modules::registrations::use_cases::send_payment_reminder::command::SendPaymentReminder;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(registration_id): Path<Uuid>) -> impl IntoResponse {
    let result = state
        .ledger
        .send_payment_reminder(SendPaymentReminder { registration_id })
        .await;
    respond(result.map(|outcome| outcome.map(|_| None)), StatusCode::OK)
}
