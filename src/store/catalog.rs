use std::sync::Arc;

use crate::error::IntakeError;

use super::backend::MetadataStore;
use super::keys::{derive_record_key, RECORD_PREFIX};
use super::types::MetadataRecord;

/// Read-side client over the metadata store.
///
/// Owns the step from client-facing CIDs to storage keys, so handlers
/// never touch key derivation and the store never sees a raw CID.
pub struct RecordCatalog {
    store: Arc<dyn MetadataStore>,
}

impl RecordCatalog {
    pub fn new(store: Arc<dyn MetadataStore>) -> Self {
        Self { store }
    }

    /// Looks up the record for one CID.
    ///
    /// A missing record is always `NotFound`, never a default value: a CID
    /// that was accepted but not yet processed looks exactly like one that
    /// was never submitted.
    pub async fn get_record(&self, cid: &str) -> Result<MetadataRecord, IntakeError> {
        if cid.is_empty() {
            return Err(IntakeError::InvalidInput("empty cid".to_string()));
        }
        let key = derive_record_key(cid);
        tracing::debug!("looking up record {} for cid {}", key.0, cid);
        Ok(self.store.read(&key).await?)
    }

    /// Returns the full processed dataset, ordered by record key.
    pub async fn all_records(&self) -> Result<Vec<MetadataRecord>, IntakeError> {
        Ok(self.store.scan(RECORD_PREFIX).await?)
    }
}
