// Background workers spawned by the binary.

use crate::modules::registrations::core::events::RegistrationEvent;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Back up the store every `period`, outside the ledger lock. The immediate first tick is
/// skipped so a restart does not produce a backup of its own.
pub fn spawn_backup_worker(store: Arc<dyn EventStore<RegistrationEvent>>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            tracing::debug!("backup tick");
            store.backup().await;
        }
    })
}
