//! `mscrape run` – scrape, post-process and export one job.

use anyhow::Result;
use mscrape_core::config::{self, Settings};
use mscrape_core::export::{export_records, ExportFormat};
use mscrape_core::input::{load_inputs, JobInput};
use mscrape_core::{logging, pipeline, postprocess};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug)]
pub struct RunArgs {
    pub input: PathBuf,
    pub settings: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<String>,
}

/// Output path and format for a job.
///
/// Format: explicit flag, then a recognised extension of the `--output`
/// path, then the input file. Path: `--output`, then the input file.
pub fn resolve_output(
    job: &JobInput,
    output: Option<PathBuf>,
    format: Option<&str>,
) -> Result<(PathBuf, ExportFormat)> {
    let format = match (format, output.as_deref().and_then(ExportFormat::from_extension)) {
        (Some(f), _) => f.parse::<ExportFormat>()?,
        (None, Some(f)) => f,
        (None, None) => job.output_format()?,
    };
    let path = output.unwrap_or_else(|| job.output.path.clone());
    Ok((path, format))
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(p) => config::load_from_path(p),
        None => config::load_or_init(),
    }
}

pub fn run_scrape(args: RunArgs) -> Result<()> {
    let settings = load_settings(args.settings.as_ref())?;
    if let Err(e) = logging::init_logging(&settings.log_level) {
        logging::init_logging_stderr(&settings.log_level);
        tracing::warn!("file logging unavailable, using stderr: {e:#}");
    }
    tracing::debug!("loaded settings: {:?}", settings);

    let job = load_inputs(&args.input)?;
    let (out_path, format) = resolve_output(&job, args.output, args.format.as_deref())?;
    if job.profiles.is_empty() {
        tracing::warn!(input = %args.input.display(), "no profiles in input");
    }

    let started = Instant::now();
    let report = pipeline::run_http(
        &job.profiles,
        job.max_items,
        settings.request_timeout(),
        &settings.user_agent,
        settings.retry_policy(),
    );
    let fetched = report.records.len();
    let skipped = report.skipped.len();
    let records = postprocess::process(report.records, &job.filters(), job.max_items);

    export_records(&records, &out_path, format)?;

    println!(
        "Scraped {} profile(s), skipped {}, wrote {} record(s) as {} to {} in {:.1}s",
        fetched,
        skipped,
        records.len(),
        format,
        out_path.display(),
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
