use anyhow::Result;
use rust_xlsxwriter::Workbook;

use crate::record::{ProfileRecord, FIELD_NAMES};

const SHEET_NAME: &str = "results";

/// Single-sheet workbook: header row in field order, one row per record.
pub(super) fn encode(records: &[ProfileRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in FIELD_NAMES.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in record.values().iter().enumerate() {
            if let Some(v) = value {
                sheet.write_string(row, col as u16, *v)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
