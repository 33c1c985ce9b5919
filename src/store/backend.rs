use async_trait::async_trait;
use thiserror::Error;

use super::keys::RecordKey;
use super::types::MetadataRecord;

/// Failures surfaced by a metadata store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists under the requested key.
    #[error("no record stored under key {0}")]
    NotFound(String),
    /// The backend could not complete the operation.
    #[error("metadata store unavailable: {0}")]
    Unavailable(String),
}

/// Read contract the intake service requires from its backing store.
///
/// The intake tier never writes records; the downstream fetch worker owns
/// the write path. Both operations are complete-or-error: a partial scan
/// result is reported as `Unavailable`, never returned as a shorter list.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Reads the record stored under exactly `key`.
    async fn read(&self, key: &RecordKey) -> Result<MetadataRecord, StoreError>;

    /// Returns every record whose key starts with `prefix`, ordered by key.
    ///
    /// An empty dataset is `Ok(vec![])`, not an error.
    async fn scan(&self, prefix: &str) -> Result<Vec<MetadataRecord>, StoreError>;
}
