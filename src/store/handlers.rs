use std::sync::Arc;

use axum::extract::Path;
use axum::{Extension, Json};

use crate::error::IntakeError;

use super::catalog::RecordCatalog;
use super::types::MetadataRecord;

/// GET /tokens - returns every processed record, ordered by key.
pub async fn handle_list_tokens(
    Extension(catalog): Extension<Arc<RecordCatalog>>,
) -> Result<Json<Vec<MetadataRecord>>, IntakeError> {
    let records = catalog.all_records().await?;
    tracing::info!("retrieved dataset of {} records", records.len());
    Ok(Json(records))
}

/// GET /tokens/:cid - returns the processed record for one CID.
pub async fn handle_get_token(
    Path(cid): Path<String>,
    Extension(catalog): Extension<Arc<RecordCatalog>>,
) -> Result<Json<MetadataRecord>, IntakeError> {
    let record = catalog.get_record(&cid).await?;
    tracing::info!("retrieved record for cid {}", cid);
    Ok(Json(record))
}
