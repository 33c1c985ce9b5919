use std::io::Read;
use std::sync::Arc;

use uuid::Uuid;

use crate::error::IntakeError;
use crate::queue::backend::{QueueError, WorkQueue};
use crate::queue::types::QueueItem;

use super::types::{SubmissionAck, CSV_CHUNK_SIZE};

/// Write side of the intake service.
///
/// Validates submissions, assigns submission ids, and turns each
/// submission into one or more queue items. Every call is independent:
/// no state survives between submissions, and nothing is retried here.
pub struct IngestCoordinator {
    queue: Arc<dyn WorkQueue>,
}

impl IngestCoordinator {
    pub fn new(queue: Arc<dyn WorkQueue>) -> Self {
        Self { queue }
    }

    /// Queues one CID.
    ///
    /// The submission id is the CID itself, so resubmitting a CID
    /// produces another item under the same id and stays idempotent for
    /// the worker.
    pub async fn submit_single(&self, cid: &str) -> Result<SubmissionAck, IntakeError> {
        if cid.is_empty() {
            return Err(IntakeError::InvalidInput("empty cid".to_string()));
        }
        let item = QueueItem::cid_batch(cid.to_string(), vec![cid.to_string()]);
        self.queue.enqueue(item).await?;
        tracing::info!("queued cid {}", cid);
        Ok(SubmissionAck {
            submissions: 1,
            cids: 1,
        })
    }

    /// Queues a client-assembled batch as a single item.
    ///
    /// The batch is not split and its members are not validated
    /// individually; the caller owns the batch's composition.
    pub async fn submit_bulk(&self, cids: Vec<String>) -> Result<SubmissionAck, IntakeError> {
        if cids.is_empty() {
            return Err(IntakeError::InvalidInput("no cids in submission".to_string()));
        }
        let count = cids.len();
        let item = QueueItem::cid_batch(submission_id("bulk"), cids);
        self.queue.enqueue(item).await?;
        tracing::info!("queued bulk submission of {} cids", count);
        Ok(SubmissionAck {
            submissions: 1,
            cids: count,
        })
    }

    /// Streams a one-column CSV of CIDs into queue items of
    /// `CSV_CHUNK_SIZE`, preserving row order within and across chunks.
    ///
    /// The first bad row or refused enqueue aborts the upload. Chunks
    /// accepted before the failure stay queued; the error reports how
    /// many via `accepted_chunks`.
    pub async fn submit_csv<R: Read>(&self, input: R) -> Result<SubmissionAck, IntakeError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(input);

        let mut buffer: Vec<String> = Vec::with_capacity(CSV_CHUNK_SIZE);
        let mut accepted_chunks = 0usize;
        let mut total_cids = 0usize;

        for row in reader.records() {
            let record =
                row.map_err(|err| IntakeError::InvalidInput(format!("invalid CSV row: {err}")))?;
            if record.len() != 1 {
                return Err(IntakeError::InvalidInput(format!(
                    "CSV row {} has {} fields, expected 1",
                    total_cids + 1,
                    record.len()
                )));
            }
            let cid = &record[0];
            if cid.is_empty() {
                return Err(IntakeError::InvalidInput(format!(
                    "CSV row {} has an empty cid",
                    total_cids + 1
                )));
            }
            buffer.push(cid.to_string());
            total_cids += 1;

            if buffer.len() >= CSV_CHUNK_SIZE {
                let chunk = std::mem::replace(&mut buffer, Vec::with_capacity(CSV_CHUNK_SIZE));
                self.enqueue_chunk(chunk, accepted_chunks).await?;
                accepted_chunks += 1;
            }
        }

        if !buffer.is_empty() {
            self.enqueue_chunk(buffer, accepted_chunks).await?;
            accepted_chunks += 1;
        }

        if total_cids == 0 {
            return Err(IntakeError::InvalidInput("no cids in upload".to_string()));
        }

        tracing::info!(
            "queued {} csv chunk(s) covering {} cids",
            accepted_chunks,
            total_cids
        );
        Ok(SubmissionAck {
            submissions: accepted_chunks,
            cids: total_cids,
        })
    }

    async fn enqueue_chunk(
        &self,
        cids: Vec<String>,
        accepted_chunks: usize,
    ) -> Result<(), IntakeError> {
        let item = QueueItem::cid_batch(submission_id("csv"), cids);
        self.queue.enqueue(item).await.map_err(|err| {
            let QueueError::Unavailable(reason) = err;
            IntakeError::QueueUnavailable {
                accepted_chunks,
                reason,
            }
        })
    }
}

/// Fresh submission id for multi-CID submissions: `<kind>-<uuid>`.
fn submission_id(kind: &str) -> String {
    format!("{}-{}", kind, Uuid::new_v4())
}
