use axum::{Json, extract::State, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::registrations::adapters::inbound::http::error_response;
use crate::shared::infrastructure::event_store::Version;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayResponse {
    pub latest_version: Version,
}

/// Rebuild the projection from the store, e.g. after the log was restored from a backup.
pub async fn handle(State(state): State<AppState>) -> Response {
    match state.ledger.replay().await {
        Ok(latest_version) => Json(ReplayResponse { latest_version }).into_response(),
        Err(error) => error_response(error),
    }
}
