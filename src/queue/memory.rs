use async_trait::async_trait;
use tokio::sync::Mutex;

use super::backend::{QueueError, WorkQueue};
use super::types::QueueItem;

/// In-memory work queue backed by an append-only log.
///
/// Stands in for the shared durable queue in tests and single-node
/// deployments. Items are kept in arrival order and never deduplicated,
/// matching the delivery contract of the real backend.
pub struct MemoryQueue {
    table: String,
    items: Mutex<Vec<QueueItem>>,
}

impl MemoryQueue {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            items: Mutex::new(Vec::new()),
        }
    }

    pub async fn queued_count(&self) -> usize {
        self.items.lock().await.len()
    }

    /// Snapshot of the queued items in arrival order.
    pub async fn queued_items(&self) -> Vec<QueueItem> {
        self.items.lock().await.clone()
    }
}

#[async_trait]
impl WorkQueue for MemoryQueue {
    async fn enqueue(&self, item: QueueItem) -> Result<(), QueueError> {
        tracing::debug!(
            "enqueueing submission {} ({} cids) into {}",
            item.submission_id,
            item.cids().len(),
            self.table
        );
        self.items.lock().await.push(item);
        Ok(())
    }
}
