use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::modules::registrations::use_cases::cancel_registration::inbound::http as cancel_http;
use crate::modules::registrations::use_cases::change_accommodation::inbound::http as accommodation_http;
use crate::modules::registrations::use_cases::pay_registration::inbound::http as pay_http;
use crate::modules::registrations::use_cases::query_ledger::inbound::http as query_http;
use crate::modules::registrations::use_cases::register::inbound::http as register_http;
use crate::modules::registrations::use_cases::replay_ledger::inbound::http as replay_http;
use crate::modules::registrations::use_cases::send_payment_reminder::inbound::http as reminder_http;
use crate::modules::registrations::use_cases::undo_payment::inbound::http as undo_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/registrations",
            post(register_http::handle).get(query_http::list_registrations),
        )
        .route("/registrations/{id}", get(query_http::get_registration))
        .route("/registrations/{id}/cancel", post(cancel_http::handle))
        .route(
            "/registrations/{id}/payments",
            post(pay_http::handle).get(query_http::list_payments),
        )
        .route("/registrations/{id}/payment-status", get(query_http::payment_status))
        .route("/registrations/{id}/payment-reminder", post(reminder_http::handle))
        .route("/payments/{id}", delete(undo_http::handle))
        .route("/payments/total", get(query_http::total_paid))
        .route("/payments/unpaid", get(query_http::unpaid_registrations))
        .route("/participants", get(query_http::list_participants))
        .route("/participants/{id}/accommodation", put(accommodation_http::handle))
        .route("/capacity", get(query_http::capacity))
        .route("/statistics", get(query_http::statistics))
        .route("/statistics/histogram", get(query_http::histogram))
        .route("/admin/replay", post(replay_http::handle))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
