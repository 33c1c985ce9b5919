use async_trait::async_trait;
use dashmap::DashMap;

use super::backend::{MetadataStore, StoreError};
use super::keys::RecordKey;
use super::types::MetadataRecord;

/// In-memory metadata store keyed by record key.
///
/// Stands in for the shared durable table in tests and single-node
/// deployments. `table` is the namespace label the deployment configured;
/// it scopes log lines the same way the table name scopes the real store.
pub struct MemoryStore {
    table: String,
    records: DashMap<String, MetadataRecord>,
}

impl MemoryStore {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            records: DashMap::new(),
        }
    }

    /// Seeds a record, standing in for the fetch worker's write path.
    pub fn insert(&self, record: MetadataRecord) {
        tracing::debug!("storing record {} in {}", record.id.0, self.table);
        self.records.insert(record.id.0.clone(), record);
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[async_trait]
impl MetadataStore for MemoryStore {
    async fn read(&self, key: &RecordKey) -> Result<MetadataRecord, StoreError> {
        self.records
            .get(&key.0)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(key.0.clone()))
    }

    async fn scan(&self, prefix: &str) -> Result<Vec<MetadataRecord>, StoreError> {
        let mut records: Vec<MetadataRecord> = self
            .records
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        Ok(records)
    }
}
