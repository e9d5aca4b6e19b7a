//! Deterministic post-processing: dedupe → keyword → domain → location → cap.
//!
//! Every stage keeps the input order. A filter with an empty list passes
//! everything through.

mod dedupe;
mod filters;

use serde::Deserialize;

use crate::record::ProfileRecord;

pub use dedupe::dedupe_by_url;
pub use filters::{apply_domain_filter, apply_keyword_filter, apply_location_filter};

/// Optional filter lists. Blank entries are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Filters {
    pub keywords: Vec<String>,
    pub email_domains: Vec<String>,
    pub location_contains: Vec<String>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.email_domains.is_empty() && self.location_contains.is_empty()
    }
}

/// Runs every stage in order and truncates to `max_items`. Filter stages
/// are skipped when no filter list is set.
pub fn process(records: Vec<ProfileRecord>, filters: &Filters, max_items: usize) -> Vec<ProfileRecord> {
    let before = records.len();
    let mut records = dedupe_by_url(records);
    let deduped = records.len();
    if !filters.is_empty() {
        records = apply_keyword_filter(records, &filters.keywords);
        records = apply_domain_filter(records, &filters.email_domains);
        records = apply_location_filter(records, &filters.location_contains);
    }
    records.truncate(max_items);
    tracing::debug!(
        before,
        deduped,
        after = records.len(),
        "post-processing done"
    );
    records
}
