use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::modules::registrations::adapters::inbound::http::respond;
use crate::modules::registrations::use_cases::undo_payment::command::UndoPayment;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(payment_id): Path<Uuid>) -> impl IntoResponse {
    let result = state.ledger.undo_payment(UndoPayment { payment_id }).await;
    respond(result.map(|outcome| outcome.map(|_| None)), StatusCode::OK)
}
