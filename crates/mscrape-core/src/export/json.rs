use anyhow::Result;

use crate::record::ProfileRecord;

/// Pretty-printed JSON array; absent fields are `null`.
pub(super) fn encode(records: &[ProfileRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}
