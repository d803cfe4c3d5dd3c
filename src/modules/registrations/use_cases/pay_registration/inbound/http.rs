use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::registrations::adapters::inbound::http::respond;
use crate::modules::registrations::use_cases::pay_registration::command::PayRegistration;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayBody {
    pub payment_id: Option<Uuid>,
    pub amount_in_cents: i64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(registration_id): Path<Uuid>,
    body: Result<Json<PayBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = PayRegistration {
        payment_id: body.payment_id.unwrap_or_else(Uuid::now_v7),
        registration_id,
        amount_in_cents: body.amount_in_cents,
    };
    let result = state.ledger.pay_registration(command).await;
    respond(result.map(|outcome| outcome.map(Some)), StatusCode::CREATED)
}
