use anyhow::{Context, Result};

use crate::record::{ProfileRecord, FIELD_NAMES};

/// Column order: field names sorted alphabetically.
fn sorted_columns() -> Vec<(usize, &'static str)> {
    let mut cols: Vec<(usize, &'static str)> = FIELD_NAMES.iter().copied().enumerate().collect();
    cols.sort_by_key(|(_, name)| *name);
    cols
}

/// Header row plus one row per record; absent fields are empty cells.
pub(super) fn encode(records: &[ProfileRecord]) -> Result<Vec<u8>> {
    let cols = sorted_columns();
    let mut wtr = ::csv::Writer::from_writer(Vec::new());
    wtr.write_record(cols.iter().map(|(_, name)| *name))?;
    for record in records {
        let values = record.values();
        wtr.write_record(cols.iter().map(|(i, _)| values[*i].unwrap_or("")))?;
    }
    wtr.into_inner().context("flush csv writer")
}
