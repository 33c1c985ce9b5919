use serde::{Deserialize, Serialize};

/// Payload carried by one queue entry.
///
/// Tagged with `kind` on the wire so consumers dispatch without guessing
/// at the shape. `cid-batch` is the only kind the intake tier produces;
/// the fetch worker ignores kinds it does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum QueuePayload {
    /// An ordered batch of CIDs for the fetch worker to resolve.
    #[serde(rename = "cid-batch")]
    CidBatch { cids: Vec<String> },
}

/// One unit of enqueued work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    /// Identifies the enqueue request that produced this item. Single-CID
    /// submissions use the CID itself, so resubmitting a CID lands on the
    /// same id; bulk and CSV submissions use a freshly generated
    /// `<kind>-<uuid>` id that never repeats.
    pub submission_id: String,
    pub payload: QueuePayload,
}

impl QueueItem {
    pub fn cid_batch(submission_id: String, cids: Vec<String>) -> Self {
        Self {
            submission_id,
            payload: QueuePayload::CidBatch { cids },
        }
    }

    /// The CIDs carried by this item, in submission order.
    pub fn cids(&self) -> &[String] {
        match &self.payload {
            QueuePayload::CidBatch { cids } => cids,
        }
    }
}
