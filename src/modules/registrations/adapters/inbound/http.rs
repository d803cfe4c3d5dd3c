// Shared HTTP response mapping for ledger commands.
//
// Status mapping
// - Applied: the status the route chose (200 or 201).
// - Skipped because the target is unknown: 404. Skipped otherwise: 200 with `applied: false`.
// - Validation: 422. Lock timeout or a ledger that is not replayed: 503. Storage: 500.

use crate::modules::registrations::application::errors::LedgerError;
use crate::modules::registrations::application::ledger::CommandOutcome;
use crate::modules::registrations::core::decision::NoOp;
use crate::shared::infrastructure::event_store::Version;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<NoOp>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn command_response(outcome: CommandOutcome<Option<Uuid>>, applied_status: StatusCode) -> Response {
    match outcome {
        CommandOutcome::Applied { version, value } => (
            applied_status,
            Json(CommandResponse {
                applied: true,
                version: Some(version),
                id: value,
                skipped: None,
            }),
        )
            .into_response(),
        CommandOutcome::Skipped { reason } => {
            let status = if reason.is_not_found() {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            (
                status,
                Json(CommandResponse {
                    applied: false,
                    version: None,
                    id: None,
                    skipped: Some(reason),
                }),
            )
                .into_response()
        }
    }
}

pub fn error_response(error: LedgerError) -> Response {
    let status = match &error {
        LedgerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        LedgerError::LockTimeout(_) | LedgerError::NotReplayed => StatusCode::SERVICE_UNAVAILABLE,
        LedgerError::Storage(_) => {
            tracing::error!(%error, "ledger storage failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub fn respond(result: Result<CommandOutcome<Option<Uuid>>, LedgerError>, applied_status: StatusCode) -> Response {
    match result {
        Ok(outcome) => command_response(outcome, applied_status),
        Err(error) => error_response(error),
    }
}
