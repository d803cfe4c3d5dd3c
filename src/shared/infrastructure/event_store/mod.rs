// Event store port shared by every backend.
//
// Purpose
// - Define the append-only contract the ledger codes against: read everything, save one event,
//   wipe, back up.
//
// Responsibilities
// - Own the envelope shape written to every backend.
// - Keep the error taxonomy backend-neutral so the ledger can treat all storage failures alike.
//
// Boundaries
// - Stores assign id and timestamp. The caller proposes the version.
// - A store never folds events. Projection is the ledger's job.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod file_log;
pub mod in_memory;
pub mod object_snapshot;

pub type Version = i64;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("version mismatch: store expected {expected}, save proposed {actual}")]
    VersionMismatch { expected: Version, actual: Version },

    #[error("event log out of sequence: expected version {expected}, found {actual}")]
    OutOfSequence { expected: Version, actual: Version },

    #[error("corrupt record at line {line}: {source}")]
    Corrupt {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Bound every stored event type satisfies.
pub trait StoredEvent: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> StoredEvent for T where T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {}

/// Durable wrapper around one domain event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    pub id: Uuid,
    pub version: Version,
    #[serde(rename = "timeStamp")]
    pub timestamp: DateTime<Utc>,
    pub payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn seal(payload: E, version: Version) -> Self {
        Self {
            id: Uuid::now_v7(),
            version,
            timestamp: Utc::now(),
            payload,
        }
    }
}

#[async_trait]
pub trait EventStore<E: StoredEvent>: Send + Sync {
    /// Every envelope ever saved, ascending by version. Never-written stores yield an empty list.
    async fn read_all(&self) -> Result<Vec<EventEnvelope<E>>, EventStoreError>;

    /// Persist `event` at `proposed_version` and return the sealed envelope once it is durable.
    async fn save(&self, event: E, proposed_version: Version) -> Result<EventEnvelope<E>, EventStoreError>;

    /// Destroy all history. Meant for resets and tests.
    async fn clear(&self) -> Result<(), EventStoreError>;

    /// Copy the history to a timestamped sibling. Failures are logged, never returned.
    async fn backup(&self);
}

/// `<name>-backup-<ISO8601>`, shared by every backend that writes backups.
pub fn backup_name(name: &str, at: DateTime<Utc>) -> String {
    format!(
        "{name}-backup-{}",
        at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    )
}

/// Reject a save whose proposed version does not follow the known head.
pub(crate) fn ensure_next_version(head: Version, proposed: Version) -> Result<(), EventStoreError> {
    if proposed != head + 1 {
        return Err(EventStoreError::VersionMismatch {
            expected: head + 1,
            actual: proposed,
        });
    }
    Ok(())
}
