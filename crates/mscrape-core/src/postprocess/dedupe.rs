use std::collections::HashSet;

use crate::record::ProfileRecord;

/// Drops records whose URL (case-insensitive) was already seen.
/// First occurrence wins; order is preserved.
pub fn dedupe_by_url(records: Vec<ProfileRecord>) -> Vec<ProfileRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| {
            let key = r.url().to_lowercase();
            !key.is_empty() && seen.insert(key)
        })
        .collect()
}
