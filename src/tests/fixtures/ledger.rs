// Shared test fixture: a replayed ledger over in-memory adapters.

use crate::modules::registrations::application::ledger::{Ledger, LedgerSettings};
use crate::modules::registrations::core::events::RegistrationEvent;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shell::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use rstest::fixture;
use std::sync::Arc;
use tower::ServiceExt;

pub struct LedgerHarness {
    pub ledger: Ledger,
    pub store: Arc<InMemoryEventStore<RegistrationEvent>>,
    pub notifier: Arc<InMemoryNotifier>,
}

pub async fn make_ledger(settings: LedgerSettings) -> LedgerHarness {
    let store = Arc::new(InMemoryEventStore::<RegistrationEvent>::new());
    let notifier = Arc::new(InMemoryNotifier::new());
    let ledger = Ledger::new(store.clone(), notifier.clone(), settings);
    ledger.replay().await.unwrap();
    LedgerHarness { ledger, store, notifier }
}

#[fixture]
pub async fn before_each() -> LedgerHarness {
    make_ledger(LedgerSettings::default()).await
}

/// HTTP state over a replayed in-memory ledger, with handles on its adapters.
pub async fn make_test_state() -> (AppState, Arc<InMemoryEventStore<RegistrationEvent>>, Arc<InMemoryNotifier>) {
    let LedgerHarness { ledger, store, notifier } = make_ledger(LedgerSettings::default()).await;
    (AppState { ledger: Arc::new(ledger) }, store, notifier)
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
