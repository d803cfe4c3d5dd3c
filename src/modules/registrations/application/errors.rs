use crate::modules::registrations::core::decision::DecideError;
use crate::shared::infrastructure::event_store::EventStoreError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("command rejected: {0}")]
    Validation(#[from] DecideError),

    #[error(transparent)]
    Storage(#[from] EventStoreError),

    #[error("ledger lock not acquired within {0:?}")]
    LockTimeout(Duration),

    #[error("ledger has not been replayed")]
    NotReplayed,
}
