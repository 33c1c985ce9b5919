use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Prefix under which every processed-object record lives in the store.
///
/// The listing endpoint scans this prefix, so records written under any
/// other prefix (queue bookkeeping, worker state) never leak into the
/// dataset view.
pub const RECORD_PREFIX: &str = "d-";

/// Storage key of one metadata record.
///
/// Keys are derived, never handed out by the store, so the intake API and
/// the downstream fetch worker agree on where a record lives without ever
/// coordinating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey(pub String);

/// Derives the record key for a CID: `RECORD_PREFIX` followed by the
/// lowercase hex SHA-256 of the CID text.
///
/// The full digest is kept. Distinct CIDs therefore collide only if
/// SHA-256 does, and re-deriving for the same CID always lands on the
/// same key regardless of which process runs the derivation.
pub fn derive_record_key(cid: &str) -> RecordKey {
    let digest = Sha256::digest(cid.as_bytes());
    RecordKey(format!("{}{}", RECORD_PREFIX, hex::encode(digest)))
}
