//! `mscrape normalize` – print canonical profile URLs.

use anyhow::{bail, Result};
use mscrape_core::url_model::normalize_profile_url;

pub fn run_normalize(urls: &[String]) -> Result<()> {
    let mut failed = 0usize;
    for raw in urls {
        match normalize_profile_url(raw) {
            Ok(url) => println!("{url}"),
            Err(e) => {
                failed += 1;
                println!("{raw}\terror: {e}");
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} URL(s) could not be normalized", urls.len());
    }
    Ok(())
}
