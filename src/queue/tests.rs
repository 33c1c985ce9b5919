//! Queue Module Tests
//!
//! Validates the queue item wire format and the in-memory queue's
//! delivery bookkeeping.
//!
//! ## Test Scopes
//! - **QueueItem**: Ensures the tagged payload shape the fetch worker
//!   parses stays stable.
//! - **MemoryQueue**: Verifies arrival order and the no-deduplication
//!   contract.

#[cfg(test)]
mod tests {
    use crate::queue::backend::WorkQueue;
    use crate::queue::memory::MemoryQueue;
    use crate::queue::types::{QueueItem, QueuePayload};
    use serde_json::json;

    // ============================================================
    // QUEUE ITEM WIRE FORMAT TESTS
    // ============================================================

    #[test]
    fn test_queue_item_wire_shape() {
        let item = QueueItem::cid_batch(
            "bulk-0000".to_string(),
            vec!["bafy-a".to_string(), "bafy-b".to_string()],
        );

        // The worker dispatches on payload.kind; this shape is shared code
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "submission_id": "bulk-0000",
                "payload": {
                    "kind": "cid-batch",
                    "cids": ["bafy-a", "bafy-b"],
                }
            })
        );
    }

    #[test]
    fn test_queue_item_parses_from_wire() {
        let raw = r#"{"submission_id":"csv-1234","payload":{"kind":"cid-batch","cids":["bafy-x"]}}"#;

        let item: QueueItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.submission_id, "csv-1234");
        assert_eq!(item.cids(), ["bafy-x".to_string()]);
        let QueuePayload::CidBatch { cids } = &item.payload;
        assert_eq!(cids.len(), 1);
    }

    // ============================================================
    // MEMORY QUEUE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_memory_queue_preserves_arrival_order() {
        let queue = MemoryQueue::new("test-table");

        for i in 0..5 {
            let item = QueueItem::cid_batch(format!("sub-{}", i), vec![format!("bafy-{}", i)]);
            queue.enqueue(item).await.unwrap();
        }

        let items = queue.queued_items().await;
        assert_eq!(queue.queued_count().await, 5);
        let ids: Vec<&str> = items.iter().map(|i| i.submission_id.as_str()).collect();
        assert_eq!(ids, ["sub-0", "sub-1", "sub-2", "sub-3", "sub-4"]);
    }

    #[tokio::test]
    async fn test_memory_queue_never_deduplicates() {
        let queue = MemoryQueue::new("test-table");
        let item = QueueItem::cid_batch("bafy-same".to_string(), vec!["bafy-same".to_string()]);

        // Resubmitting the same id is two deliveries, not one
        queue.enqueue(item.clone()).await.unwrap();
        queue.enqueue(item).await.unwrap();

        let items = queue.queued_items().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], items[1]);
    }
}
