use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::keys::RecordKey;

/// One processed-object record as the fetch worker wrote it.
///
/// Only `id` is interpreted here. Everything else the worker recorded
/// (pin status, sizes, timestamps) rides along in `attributes` and is
/// returned to clients untouched, so the worker can grow its schema
/// without an intake release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Derived record key, `d-` followed by the hex SHA-256 of the CID.
    pub id: RecordKey,
    /// Worker-owned fields, flattened into the top level on the wire.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl MetadataRecord {
    pub fn new(id: RecordKey, attributes: Map<String, Value>) -> Self {
        Self { id, attributes }
    }
}
