// Composition root for the registration ledger.
//
// Responsibilities
// - Pick the concrete event store named by configuration.
// - Construct the one Ledger of the process and replay it before anything is served.
// - Hand the ledger to HTTP state and the store to the backup worker.

pub mod http;
pub mod state;
pub mod workers;

use crate::modules::registrations::application::ledger::Ledger;
use crate::modules::registrations::core::events::RegistrationEvent;
use crate::shared::config::{LedgerConfig, StoreBackend};
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::file_log::FileLogStore;
use crate::shared::infrastructure::event_store::object_snapshot::ObjectSnapshotStore;
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::object_storage::local_dir::LocalDirObjectClient;
use crate::shell::state::AppState;
use anyhow::Context;
use std::sync::Arc;

pub fn build_store(backend: &StoreBackend) -> Arc<dyn EventStore<RegistrationEvent>> {
    match backend {
        StoreBackend::File { path } => Arc::new(FileLogStore::<RegistrationEvent>::new(path.clone())),
        StoreBackend::Object { root, key } => Arc::new(ObjectSnapshotStore::<RegistrationEvent>::new(
            Arc::new(LocalDirObjectClient::new(root.clone())),
            key.clone(),
        )),
    }
}

/// Build and replay the ledger. Fails when the stored history cannot be folded.
pub async fn bootstrap(
    config: &LedgerConfig,
    store: Arc<dyn EventStore<RegistrationEvent>>,
    notifier: Arc<dyn Notifier>,
) -> anyhow::Result<AppState> {
    let ledger = Ledger::new(store, notifier, config.ledger_settings());
    ledger.replay().await.context("replaying the event store")?;
    Ok(AppState {
        ledger: Arc::new(ledger),
    })
}
