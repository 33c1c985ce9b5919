use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, Path};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::error::IntakeError;

use super::coordinator::IngestCoordinator;
use super::types::{BulkRequest, SubmitResponse};

/// POST /tokens/:cid - queues one CID for fetching.
pub async fn handle_submit_token(
    Path(cid): Path<String>,
    Extension(coordinator): Extension<Arc<IngestCoordinator>>,
) -> Result<(StatusCode, Json<SubmitResponse>), IntakeError> {
    let ack = coordinator.submit_single(&cid).await?;
    Ok((StatusCode::ACCEPTED, Json(SubmitResponse::queued(ack))))
}

/// POST /bulk - queues a JSON batch of CIDs as one submission.
pub async fn handle_submit_bulk(
    Extension(coordinator): Extension<Arc<IngestCoordinator>>,
    body: Result<Json<BulkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponse>), IntakeError> {
    let Json(request) =
        body.map_err(|err| IntakeError::InvalidInput(format!("invalid request body: {err}")))?;
    let ack = coordinator.submit_bulk(request.cids).await?;
    Ok((StatusCode::ACCEPTED, Json(SubmitResponse::queued(ack))))
}

/// POST /csv - queues the CIDs from an uploaded one-column CSV.
///
/// The upload is multipart form data; the CSV travels in the `file`
/// field and any other fields are ignored.
pub async fn handle_submit_csv(
    Extension(coordinator): Extension<Arc<IngestCoordinator>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitResponse>), IntakeError> {
    while let Some(field) = multipart.next_field().await.map_err(|err| {
        IntakeError::InvalidInput(format!("invalid multipart body: {err}"))
    })? {
        if field.name() != Some("file") {
            continue;
        }
        let data = field.bytes().await.map_err(|err| {
            IntakeError::InvalidInput(format!("failed to read uploaded file: {err}"))
        })?;
        let ack = coordinator.submit_csv(data.as_ref()).await?;
        return Ok((StatusCode::ACCEPTED, Json(SubmitResponse::queued(ack))));
    }
    Err(IntakeError::InvalidInput(
        "multipart upload has no file field".to_string(),
    ))
}
