// In memory implementation of the EventStore port.
//
// Purpose
// - Support ledger tests and local development without a disk or a bucket.
//
// Responsibilities
// - Keep envelopes in a vector ordered by version.
// - Enforce the next-version rule on save.
// - Simulate an unreachable backend, slow reads and slow appends for failure and concurrency tests.

use crate::shared::infrastructure::event_store::{
    EventEnvelope, EventStore, EventStoreError, StoredEvent, Version, ensure_next_version,
};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryEventStore<E: StoredEvent> {
    inner: RwLock<Vec<EventEnvelope<E>>>,
    is_offline: AtomicBool,
    delay_append_ms: AtomicU64,
    delay_read_ms: AtomicU64,
    backups: AtomicUsize,
}

impl<E: StoredEvent> Default for InMemoryEventStore<E> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
            is_offline: AtomicBool::new(false),
            delay_append_ms: AtomicU64::new(0),
            delay_read_ms: AtomicU64::new(0),
            backups: AtomicUsize::new(0),
        }
    }
}

impl<E: StoredEvent> InMemoryEventStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::SeqCst);
    }

    /// Reads sleep first and check the offline flag afterwards.
    pub fn set_delay_read_ms(&self, ms: u64) {
        self.delay_read_ms.store(ms, Ordering::SeqCst);
    }

    pub fn backup_count(&self) -> usize {
        self.backups.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<E: StoredEvent> EventStore<E> for InMemoryEventStore<E> {
    async fn read_all(&self) -> Result<Vec<EventEnvelope<E>>, EventStoreError> {
        let delay = self.delay_read_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.ensure_online()?;
        Ok(self.inner.read().await.clone())
    }

    async fn save(&self, event: E, proposed_version: Version) -> Result<EventEnvelope<E>, EventStoreError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.inner.write().await;
        let head = guard.last().map(|e| e.version).unwrap_or(0);
        ensure_next_version(head, proposed_version)?;
        let envelope = EventEnvelope::seal(event, proposed_version);
        guard.push(envelope.clone());
        Ok(envelope)
    }

    async fn clear(&self) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        self.inner.write().await.clear();
        Ok(())
    }

    async fn backup(&self) {
        if let Err(err) = self.ensure_online() {
            tracing::warn!(error = %err, "in-memory backup skipped");
            return;
        }
        self.backups.fetch_add(1, Ordering::SeqCst);
    }
}
