use serde::{Deserialize, Serialize};

/// CSV uploads are flushed to the queue in batches of this many CIDs.
///
/// Fixed by the item size the fetch worker is provisioned for; not a
/// tuning knob exposed to clients or deployments.
pub const CSV_CHUNK_SIZE: usize = 5;

/// Body of POST /bulk.
#[derive(Debug, Deserialize)]
pub struct BulkRequest {
    pub cids: Vec<String>,
}

/// What a completed submission put on the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionAck {
    /// Queue items written.
    pub submissions: usize,
    /// CIDs covered across those items.
    pub cids: usize,
}

/// Body returned with every 202 Accepted.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: String,
    pub submissions: usize,
    pub cids: usize,
}

impl SubmitResponse {
    pub fn queued(ack: SubmissionAck) -> Self {
        Self {
            status: "queued".to_string(),
            submissions: ack.submissions,
            cids: ack.cids,
        }
    }
}
