// Local append-only event log, one JSON envelope per line.
//
// Purpose
// - Durable storage with O(1) writes for hosts with a persistent disk.
//
// Responsibilities
// - Append and fsync one line per save.
// - Parse every non-blank line on read. A line that does not parse is a torn or corrupt write
//   and fails the whole read.
// - Remember the last version seen so out-of-sequence saves are refused without a rescan.

use crate::shared::infrastructure::event_store::{
    EventEnvelope, EventStore, EventStoreError, StoredEvent, Version, backup_name,
    ensure_next_version,
};
use chrono::Utc;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

pub struct FileLogStore<E: StoredEvent> {
    path: PathBuf,
    head: Mutex<Option<Version>>,
    _event: PhantomData<fn() -> E>,
}

impl<E: StoredEvent> FileLogStore<E> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            head: Mutex::new(None),
            _event: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_envelopes(&self) -> Result<Vec<EventEnvelope<E>>, EventStoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut envelopes = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let envelope = serde_json::from_str(line).map_err(|source| EventStoreError::Corrupt {
                line: index + 1,
                source,
            })?;
            envelopes.push(envelope);
        }
        Ok(envelopes)
    }
}

#[async_trait::async_trait]
impl<E: StoredEvent> EventStore<E> for FileLogStore<E> {
    async fn read_all(&self) -> Result<Vec<EventEnvelope<E>>, EventStoreError> {
        let mut head = self.head.lock().await;
        let envelopes = self.read_envelopes().await?;
        *head = Some(envelopes.last().map(|e| e.version).unwrap_or(0));
        Ok(envelopes)
    }

    async fn save(&self, event: E, proposed_version: Version) -> Result<EventEnvelope<E>, EventStoreError> {
        let mut head = self.head.lock().await;
        if let Some(current) = *head {
            ensure_next_version(current, proposed_version)?;
        }

        let envelope = EventEnvelope::seal(event, proposed_version);
        let mut line = serde_json::to_vec(&envelope)?;
        line.push(b'\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.sync_all().await?;

        *head = Some(proposed_version);
        Ok(envelope)
    }

    async fn clear(&self) -> Result<(), EventStoreError> {
        let mut head = self.head.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        *head = Some(0);
        Ok(())
    }

    async fn backup(&self) {
        let Some(file_name) = self.path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %self.path.display(), "event log path has no file name, backup skipped");
            return;
        };
        let target = self.path.with_file_name(backup_name(file_name, Utc::now()));
        match fs::copy(&self.path, &target).await {
            Ok(bytes) => tracing::info!(backup = %target.display(), bytes, "event log backed up"),
            Err(err) => tracing::warn!(error = %err, path = %self.path.display(), "event log backup failed"),
        }
    }
}

#[cfg(test)]
mod file_log_store_tests {
    use super::*;
    use crate::tests::fixtures::events::DomainEvent;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn before_each() -> (TempDir, FileLogStore<DomainEvent>) {
        let dir = TempDir::new().unwrap();
        let store = FileLogStore::new(dir.path().join("data").join("events.jsonl"));
        (dir, store)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_read_an_empty_history_when_the_file_is_missing(
        before_each: (TempDir, FileLogStore<DomainEvent>),
    ) {
        let (_dir, store) = before_each;
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_one_line_per_envelope(before_each: (TempDir, FileLogStore<DomainEvent>)) {
        let (_dir, store) = before_each;
        store.save(DomainEvent::named("a"), 1).await.unwrap();
        store.save(DomainEvent::named("b"), 2).await.unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.ends_with('\n'));
        let first: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(first["version"], 1);
        assert_eq!(first["payload"]["name"], "a");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_skip_blank_lines(before_each: (TempDir, FileLogStore<DomainEvent>)) {
        let (_dir, store) = before_each;
        store.save(DomainEvent::named("a"), 1).await.unwrap();
        let mut content = std::fs::read_to_string(store.path()).unwrap();
        content.push_str("\n   \n");
        std::fs::write(store.path(), content).unwrap();

        assert_eq!(store.read_all().await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_on_a_truncated_line(before_each: (TempDir, FileLogStore<DomainEvent>)) {
        let (_dir, store) = before_each;
        store.save(DomainEvent::named("a"), 1).await.unwrap();
        let mut content = std::fs::read_to_string(store.path()).unwrap();
        content.push_str("{\"id\":\"0190");
        std::fs::write(store.path(), content).unwrap();

        let result = store.read_all().await;
        assert!(matches!(result, Err(EventStoreError::Corrupt { line: 2, .. })));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_an_out_of_sequence_save_once_the_head_is_known(
        before_each: (TempDir, FileLogStore<DomainEvent>),
    ) {
        let (_dir, store) = before_each;
        store.save(DomainEvent::named("a"), 1).await.unwrap();
        let result = store.save(DomainEvent::named("b"), 3).await;
        assert!(matches!(
            result,
            Err(EventStoreError::VersionMismatch { expected: 2, actual: 3 })
        ));
        assert_eq!(store.read_all().await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_the_file_on_clear(before_each: (TempDir, FileLogStore<DomainEvent>)) {
        let (_dir, store) = before_each;
        store.save(DomainEvent::named("a"), 1).await.unwrap();
        store.clear().await.unwrap();
        assert!(!store.path().exists());
        store.clear().await.unwrap();
        assert_eq!(store.save(DomainEvent::named("b"), 1).await.unwrap().version, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_copy_the_log_next_to_itself_on_backup(
        before_each: (TempDir, FileLogStore<DomainEvent>),
    ) {
        let (_dir, store) = before_each;
        store.save(DomainEvent::named("a"), 1).await.unwrap();
        store.backup().await;

        let parent = store.path().parent().unwrap();
        let backups: Vec<_> = std::fs::read_dir(parent)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("events.jsonl-backup-"))
            .collect();
        assert_eq!(backups.len(), 1);
        let copied = std::fs::read_to_string(parent.join(&backups[0])).unwrap();
        assert_eq!(copied, std::fs::read_to_string(store.path()).unwrap());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_fail_a_backup_of_a_missing_log(before_each: (TempDir, FileLogStore<DomainEvent>)) {
        let (_dir, store) = before_each;
        store.backup().await;
        assert!(!store.path().exists());
    }
}
