//! Service-level error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::queue::backend::QueueError;
use crate::store::backend::StoreError;

/// Everything an intake operation can fail with.
///
/// Handlers return this directly; the `IntoResponse` impl fixes the
/// status code and body shape in one place.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The request itself is unacceptable. Nothing was enqueued.
    #[error("invalid submission: {0}")]
    InvalidInput(String),
    /// No record exists for the requested CID.
    #[error("no record stored under key {0}")]
    NotFound(String),
    /// The metadata store could not complete a read.
    #[error("metadata store unavailable: {0}")]
    StoreUnavailable(String),
    /// The work queue refused an item mid-submission. `accepted_chunks`
    /// items were already durably queued and stay queued; the rest of the
    /// submission was dropped.
    #[error("work queue unavailable after {accepted_chunks} accepted chunk(s): {reason}")]
    QueueUnavailable {
        accepted_chunks: usize,
        reason: String,
    },
    /// A failure with no better classification.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntakeError {
    fn status_code(&self) -> StatusCode {
        match self {
            IntakeError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            IntakeError::NotFound(_) => StatusCode::NOT_FOUND,
            IntakeError::StoreUnavailable(_) | IntakeError::QueueUnavailable { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            IntakeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::info!("request rejected: {}", self);
        }
        let body = Json(serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        }));
        (status, body).into_response()
    }
}

impl From<StoreError> for IntakeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(key) => IntakeError::NotFound(key),
            StoreError::Unavailable(reason) => IntakeError::StoreUnavailable(reason),
        }
    }
}

impl From<QueueError> for IntakeError {
    fn from(err: QueueError) -> Self {
        let QueueError::Unavailable(reason) = err;
        IntakeError::QueueUnavailable {
            accepted_chunks: 0,
            reason,
        }
    }
}
