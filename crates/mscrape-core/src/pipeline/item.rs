//! Per-URL scrape step.

use crate::error::SkipReason;
use crate::extract::extract;
use crate::fetch::{is_markup_content_type, PageSource};
use crate::record::{build, ProfileRecord};
use crate::url_model::normalize_profile_url;

/// Produces one record for `raw_url`, or the reason it yields none.
pub fn scrape_profile<S>(source: &S, raw_url: &str) -> Result<ProfileRecord, SkipReason>
where
    S: PageSource + ?Sized,
{
    let url = normalize_profile_url(raw_url)?;
    let page = source.fetch(&url)?;

    if !page.is_success() {
        return Err(SkipReason::HttpStatus(page.status));
    }
    let content_type = page.content_type.unwrap_or_default();
    if !is_markup_content_type(&content_type) {
        return Err(SkipReason::NonHtmlContent { content_type });
    }

    let fields = extract(&page.body);
    tracing::debug!(url = %url, title = %fields.title, has_email = fields.email.is_some(), "extracted");
    Ok(build(&url, fields))
}
