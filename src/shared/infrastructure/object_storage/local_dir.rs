// Objects as files under a root directory, for a mounted bucket or a single-host deployment.

use crate::shared::infrastructure::object_storage::{ObjectClient, ObjectStorageError};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct LocalDirObjectClient {
    root: PathBuf,
}

impl LocalDirObjectClient {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn full_path(&self, key: &str) -> Result<PathBuf, ObjectStorageError> {
        let relative = Path::new(key);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if key.is_empty() || escapes {
            return Err(ObjectStorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }

    /// Sibling of `path` named `<file name>.partial`, unique per key.
    fn staging_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".partial");
        path.with_file_name(name)
    }

    fn map_not_found(key: &str, err: std::io::Error) -> ObjectStorageError {
        if err.kind() == ErrorKind::NotFound {
            ObjectStorageError::NotFound(key.to_string())
        } else {
            ObjectStorageError::Io(err)
        }
    }
}

#[async_trait::async_trait]
impl ObjectClient for LocalDirObjectClient {
    async fn get(&self, key: &str) -> Result<Vec<u8>, ObjectStorageError> {
        let path = self.full_path(key)?;
        fs::read(&path).await.map_err(|e| Self::map_not_found(key, e))
    }

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), ObjectStorageError> {
        let path = self.full_path(key)?;
        let parent = path.parent().unwrap_or(&self.root).to_path_buf();
        fs::create_dir_all(&parent).await?;
        // Write beside the target and rename so readers never see a half-written object.
        let staging = Self::staging_path(&path);
        let mut file = fs::File::create(&staging).await?;
        file.write_all(&body).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&staging, &path).await?;
        // The rename is only durable once the directory entry is flushed.
        fs::File::open(&parent).await?.sync_all().await?;
        Ok(())
    }

    async fn copy(&self, from: &str, to: &str) -> Result<(), ObjectStorageError> {
        let source = self.full_path(from)?;
        let target = self.full_path(to)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::copy(&source, &target)
            .await
            .map(|_| ())
            .map_err(|e| Self::map_not_found(from, e))
    }

    async fn delete(&self, key: &str) -> Result<(), ObjectStorageError> {
        let path = self.full_path(key)?;
        fs::remove_file(&path).await.map_err(|e| Self::map_not_found(key, e))
    }
}

#[cfg(test)]
mod local_dir_object_client_tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[tokio::test]
    async fn it_should_write_and_read_nested_keys() {
        let dir = TempDir::new().unwrap();
        let client = LocalDirObjectClient::new(dir.path());
        client.put("ledger/events.json", b"[1]".to_vec()).await.unwrap();
        assert_eq!(client.get("ledger/events.json").await.unwrap(), b"[1]");
        assert!(!dir.path().join("ledger/events.json.partial").exists());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_keys_that_only_differ_by_extension_apart() {
        let dir = TempDir::new().unwrap();
        let client = LocalDirObjectClient::new(dir.path());
        client.put("a.json", b"[1]".to_vec()).await.unwrap();
        client.put("a.jsonl", b"[2]".to_vec()).await.unwrap();
        client.put("a.json", b"[3]".to_vec()).await.unwrap();
        assert_eq!(client.get("a.json").await.unwrap(), b"[3]");
        assert_eq!(client.get("a.jsonl").await.unwrap(), b"[2]");
        assert_eq!(
            LocalDirObjectClient::staging_path(Path::new("x/a.json")),
            PathBuf::from("x/a.json.partial")
        );
        assert_ne!(
            LocalDirObjectClient::staging_path(Path::new("x/a.json")),
            LocalDirObjectClient::staging_path(Path::new("x/a.jsonl"))
        );
        let leftovers = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".partial"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_overwrite_an_existing_object_in_place() {
        let dir = TempDir::new().unwrap();
        let client = LocalDirObjectClient::new(dir.path());
        client.put("events.json", b"[1]".to_vec()).await.unwrap();
        client.put("events.json", b"[1,2]".to_vec()).await.unwrap();
        let on_disk = std::fs::read(dir.path().join("events.json")).unwrap();
        assert_eq!(on_disk, b"[1,2]");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_missing_object_as_not_found() {
        let dir = TempDir::new().unwrap();
        let client = LocalDirObjectClient::new(dir.path());
        assert!(matches!(client.get("missing.json").await, Err(ObjectStorageError::NotFound(_))));
        assert!(matches!(
            client.copy("missing.json", "copy.json").await,
            Err(ObjectStorageError::NotFound(key)) if key == "missing.json"
        ));
    }

    #[rstest]
    #[case("")]
    #[case("../outside.json")]
    #[case("/etc/passwd")]
    #[tokio::test]
    async fn it_should_reject_keys_that_leave_the_root(#[case] key: &str) {
        let dir = TempDir::new().unwrap();
        let client = LocalDirObjectClient::new(dir.path());
        assert!(matches!(client.get(key).await, Err(ObjectStorageError::InvalidKey(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_copy_and_delete() {
        let dir = TempDir::new().unwrap();
        let client = LocalDirObjectClient::new(dir.path());
        client.put("a.json", b"[]".to_vec()).await.unwrap();
        client.copy("a.json", "b.json").await.unwrap();
        client.delete("a.json").await.unwrap();
        assert!(matches!(client.get("a.json").await, Err(ObjectStorageError::NotFound(_))));
        assert_eq!(client.get("b.json").await.unwrap(), b"[]");
    }
}
