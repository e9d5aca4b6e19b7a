//! Job input: profile URLs, filter lists, item cap and output target.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScrapeError;
use crate::export::ExportFormat;
use crate::postprocess::Filters;

/// Where and how to write results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSpec {
    pub format: String,
    pub path: PathBuf,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            path: PathBuf::from("data/output.json"),
        }
    }
}

/// Input document (JSON object). Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JobInput {
    pub profiles: Vec<String>,
    pub keywords: Vec<String>,
    pub email_domains: Vec<String>,
    pub location_contains: Vec<String>,
    pub max_items: usize,
    pub output: OutputSpec,
}

impl Default for JobInput {
    fn default() -> Self {
        Self {
            profiles: Vec::new(),
            keywords: Vec::new(),
            email_domains: Vec::new(),
            location_contains: Vec::new(),
            max_items: 100,
            output: OutputSpec::default(),
        }
    }
}

impl JobInput {
    /// Parses an input document. Anything but a JSON object is rejected.
    pub fn from_json(data: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(data).context("input is not valid JSON")?;
        if !value.is_object() {
            return Err(ScrapeError::invalid_input(
                "input JSON must be an object with keys like 'profiles'",
            )
            .into());
        }
        let input = serde_json::from_value(value).context("input has an invalid shape")?;
        Ok(input)
    }

    pub fn filters(&self) -> Filters {
        Filters {
            keywords: self.keywords.clone(),
            email_domains: self.email_domains.clone(),
            location_contains: self.location_contains.clone(),
        }
    }

    /// Validated output format.
    pub fn output_format(&self) -> Result<ExportFormat, ScrapeError> {
        self.output.format.parse()
    }
}

/// Loads the job input from a JSON file.
pub fn load_inputs(path: &Path) -> Result<JobInput> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    JobInput::from_json(&data).with_context(|| format!("load {}", path.display()))
}
