// Object storage port: whole objects addressed by key.
//
// Purpose
// - Give the snapshot event store a bucket-shaped dependency it can be tested against.
//
// Boundaries
// - Objects are opaque bytes. No listing, no partial reads, no conditional writes.

use async_trait::async_trait;
use thiserror::Error;

pub mod in_memory;
pub mod local_dir;

#[derive(Debug, Error)]
pub enum ObjectStorageError {
    #[error("object not found: {0}")]
    NotFound(String),

    #[error("invalid object key: {0}")]
    InvalidKey(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ObjectClient: Send + Sync {
    async fn get(&self, key: &str) -> Result<Vec<u8>, ObjectStorageError>;
    async fn put(&self, key: &str, body: Vec<u8>) -> Result<(), ObjectStorageError>;
    /// Server-side copy. The body never passes through the caller.
    async fn copy(&self, from: &str, to: &str) -> Result<(), ObjectStorageError>;
    async fn delete(&self, key: &str) -> Result<(), ObjectStorageError>;
}
