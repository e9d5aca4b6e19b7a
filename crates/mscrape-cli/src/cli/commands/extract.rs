//! `mscrape extract` – run the field heuristics on a saved page.

use anyhow::{Context, Result};
use mscrape_core::{extract, logging, record, url_model};
use std::path::Path;

pub fn run_extract(path: &Path, url: &str) -> Result<()> {
    logging::init_logging_stderr("warn");

    let markup =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let url = url_model::normalize_profile_url(url)?;
    let fields = extract::extract(&markup);
    let rec = record::build(&url, fields);

    println!("{}", serde_json::to_string_pretty(&rec)?);
    Ok(())
}
