// Read-only HTTP surface over the ledger projection.
//
// Boundaries
// - Never takes the mutation lock. Answers may trail an in-flight command by one event.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPaidResponse {
    pub total_paid_in_cents: i64,
}

pub async fn list_registrations(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.ledger.registrations().await)
}

pub async fn get_registration(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.ledger.registration(id).await {
        Some(registration) => Json(registration).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn payment_status(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.ledger.payment_summary(id).await {
        Some(summary) => Json(summary).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn list_payments(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    if state.ledger.registration(id).await.is_none() {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(state.ledger.payments_of(id).await).into_response()
}

pub async fn list_participants(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.ledger.active_participants().await)
}

pub async fn capacity(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.ledger.accommodation_capacity().await)
}

pub async fn total_paid(State(state): State<AppState>) -> impl IntoResponse {
    Json(TotalPaidResponse {
        total_paid_in_cents: state.ledger.total_paid().await,
    })
}

pub async fn unpaid_registrations(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.ledger.unpaid_registrations().await)
}

pub async fn statistics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.ledger.statistics().await)
}

pub async fn histogram(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.ledger.registration_histogram().await)
}
