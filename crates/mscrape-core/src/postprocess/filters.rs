//! Keyword, email-domain and location filters.

use crate::record::ProfileRecord;

/// Lowercased, trimmed, non-blank entries.
fn normalized(list: &[String]) -> Vec<String> {
    list.iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Keeps records where any keyword appears in `title + " " + snippet`.
pub fn apply_keyword_filter(records: Vec<ProfileRecord>, keywords: &[String]) -> Vec<ProfileRecord> {
    let kws = normalized(keywords);
    if kws.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| {
            let hay = format!("{} {}", r.title(), r.snippet()).to_lowercase();
            kws.iter().any(|k| hay.contains(k.as_str()))
        })
        .collect()
}

/// Keeps records whose email domain equals, or is a subdomain of, any
/// configured domain. Records without an email are dropped.
pub fn apply_domain_filter(records: Vec<ProfileRecord>, domains: &[String]) -> Vec<ProfileRecord> {
    let ds = normalized(domains);
    if ds.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| match r.email_domain() {
            Some(dom) => {
                let dom = dom.to_lowercase();
                ds.iter()
                    .any(|d| dom == *d || dom.ends_with(&format!(".{d}")))
            }
            None => false,
        })
        .collect()
}

/// Keeps records where any location string appears in
/// `location + " " + snippet`.
pub fn apply_location_filter(records: Vec<ProfileRecord>, locations: &[String]) -> Vec<ProfileRecord> {
    let locs = normalized(locations);
    if locs.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| {
            let hay = format!("{} {}", r.location().unwrap_or(""), r.snippet()).to_lowercase();
            locs.iter().any(|l| hay.contains(l.as_str()))
        })
        .collect()
}
