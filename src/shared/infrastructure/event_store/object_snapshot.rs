// Whole-history event store on top of a single remote object.
//
// Purpose
// - Durable storage for hosts with ephemeral disks, without a dedicated log service.
//
// Responsibilities
// - Read: fetch the object and parse it as one JSON array of envelopes. A missing object is an
//   empty history (nothing has been written yet).
// - Save: read-modify-write. Fetch, append, overwrite the whole object.
// - Backup: server-side copy to a timestamped key.
//
// Operating constraint
// - Read-modify-write is only correct with one writer. Two processes saving against the same key
//   will silently lose events. The ledger's mutation lock is the only serialization in place.

use crate::shared::infrastructure::event_store::{
    EventEnvelope, EventStore, EventStoreError, StoredEvent, Version, backup_name,
    ensure_next_version,
};
use crate::shared::infrastructure::object_storage::{ObjectClient, ObjectStorageError};
use chrono::Utc;
use std::marker::PhantomData;
use std::sync::Arc;

pub struct ObjectSnapshotStore<E: StoredEvent> {
    client: Arc<dyn ObjectClient>,
    key: String,
    _event: PhantomData<fn() -> E>,
}

impl<E: StoredEvent> ObjectSnapshotStore<E> {
    pub fn new(client: Arc<dyn ObjectClient>, key: impl Into<String>) -> Self {
        Self {
            client,
            key: key.into(),
            _event: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    async fn fetch(&self) -> Result<Vec<EventEnvelope<E>>, EventStoreError> {
        match self.client.get(&self.key).await {
            Ok(body) => Ok(serde_json::from_slice(&body)?),
            Err(ObjectStorageError::NotFound(_)) => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl From<ObjectStorageError> for EventStoreError {
    fn from(err: ObjectStorageError) -> Self {
        match err {
            ObjectStorageError::Io(io) => EventStoreError::Io(io),
            other => EventStoreError::Backend(other.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl<E: StoredEvent> EventStore<E> for ObjectSnapshotStore<E> {
    async fn read_all(&self) -> Result<Vec<EventEnvelope<E>>, EventStoreError> {
        self.fetch().await
    }

    async fn save(&self, event: E, proposed_version: Version) -> Result<EventEnvelope<E>, EventStoreError> {
        let mut envelopes = self.fetch().await?;
        let head = envelopes.last().map(|e| e.version).unwrap_or(0);
        ensure_next_version(head, proposed_version)?;

        let envelope = EventEnvelope::seal(event, proposed_version);
        envelopes.push(envelope.clone());
        let body = serde_json::to_vec(&envelopes)?;
        self.client.put(&self.key, body).await?;
        Ok(envelope)
    }

    async fn clear(&self) -> Result<(), EventStoreError> {
        match self.client.delete(&self.key).await {
            Ok(()) | Err(ObjectStorageError::NotFound(_)) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn backup(&self) {
        let target = backup_name(&self.key, Utc::now());
        match self.client.copy(&self.key, &target).await {
            Ok(()) => tracing::info!(key = %self.key, backup = %target, "event snapshot backed up"),
            Err(err) => tracing::warn!(error = %err, key = %self.key, "event snapshot backup failed"),
        }
    }
}
