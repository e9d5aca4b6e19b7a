//! Record set serialization.
//!
//! `encode` turns records into the byte stream of a format; `export_records`
//! writes that stream to a file, creating parent directories.

mod csv;
mod excel;
mod json;
mod xml;

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::ScrapeError;
use crate::record::ProfileRecord;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Excel,
    Xml,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "excel",
            ExportFormat::Xml => "xml",
        }
    }

    /// Format implied by a file extension (`xlsx` → Excel); `None` otherwise.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            "xlsx" => Some(ExportFormat::Excel),
            "xml" => Some(ExportFormat::Xml),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "xml" => Ok(ExportFormat::Xml),
            other => Err(ScrapeError::invalid_input(format!(
                "unsupported export format: {other:?}"
            ))),
        }
    }
}

/// Serializes `records` in `format`.
pub fn encode(records: &[ProfileRecord], format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => json::encode(records),
        ExportFormat::Csv => csv::encode(records),
        ExportFormat::Excel => excel::encode(records),
        ExportFormat::Xml => Ok(xml::encode(records)),
    }
}

/// Writes `records` to `path` in `format`.
pub fn export_records(records: &[ProfileRecord], path: &Path, format: ExportFormat) -> Result<()> {
    let bytes = encode(records, format).with_context(|| format!("encode {format}"))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(
        records = records.len(),
        path = %path.display(),
        format = %format,
        "exported"
    );
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::sample;
    use super::*;

    #[test]
    fn parse_formats() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(" CSV ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Excel);
        assert_eq!("Xml".parse::<ExportFormat>().unwrap(), ExportFormat::Xml);
    }

    #[test]
    fn unsupported_format_is_invalid_input() {
        let err = "yaml".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidInput(_)));
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ExportFormat::from_extension(Path::new("out/a.JSON")), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_extension(Path::new("a.xlsx")), Some(ExportFormat::Excel));
        assert_eq!(ExportFormat::from_extension(Path::new("a.excel")), None);
        assert_eq!(ExportFormat::from_extension(Path::new("a")), None);
    }

    #[test]
    fn export_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.json");
        export_records(&sample(), &path, ExportFormat::Json).unwrap();
        let data = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&data).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn every_format_writes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        for format in [
            ExportFormat::Json,
            ExportFormat::Csv,
            ExportFormat::Excel,
            ExportFormat::Xml,
        ] {
            let path = dir.path().join(format!("out.{}", format.as_str()));
            export_records(&sample(), &path, format).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0, "{format}");
        }
    }
}
