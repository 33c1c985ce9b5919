use async_trait::async_trait;
use thiserror::Error;

use super::types::QueueItem;

/// Failures surfaced by a work queue backend.
#[derive(Debug, Error)]
pub enum QueueError {
    /// The backend could not durably accept the item.
    #[error("work queue unavailable: {0}")]
    Unavailable(String),
}

/// Enqueue contract the intake service requires from its work queue.
///
/// `Ok` means the item is durably queued and will be delivered to a
/// consumer at least once. The queue never deduplicates: two items with
/// the same submission id are two deliveries, and consumers must make
/// their processing idempotent.
#[async_trait]
pub trait WorkQueue: Send + Sync {
    async fn enqueue(&self, item: QueueItem) -> Result<(), QueueError>;
}
