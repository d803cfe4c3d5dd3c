// In memory bucket for snapshot store tests.

use crate::shared::infrastructure::object_storage::{ObjectClient, ObjectStorageError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryObjectClient {
    objects: RwLock<HashMap<String, Vec<u8>>>,
    is_offline: AtomicBool,
}

impl InMemoryObjectClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.objects.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn ensure_online(&self) -> Result<(), ObjectStorageError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(ObjectStorageError::Backend("Object storage offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ObjectClient for InMemoryObjectClient {
    async fn get(&self, key: &str) -> Result<Vec<u8>, ObjectStorageError> {
        self.ensure_online()?;
        self.objects
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| ObjectStorageError::NotFound(key.to_string()))
    }

    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), ObjectStorageError> {
        self.ensure_online()?;
        self.objects.write().await.insert(key.to_string(), body);
        Ok(())
    }

    async fn copy(&self, from: &str, to: &str) -> Result<(), ObjectStorageError> {
        self.ensure_online()?;
        let mut guard = self.objects.write().await;
        let body = guard
            .get(from)
            .cloned()
            .ok_or_else(|| ObjectStorageError::NotFound(from.to_string()))?;
        guard.insert(to.to_string(), body);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), ObjectStorageError> {
        self.ensure_online()?;
        self.objects
            .write()
            .await
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| ObjectStorageError::NotFound(key.to_string()))
    }
}
