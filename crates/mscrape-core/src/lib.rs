pub mod config;
pub mod error;
pub mod logging;

pub mod export;
pub mod extract;
pub mod fetch;
pub mod input;
pub mod pipeline;
pub mod postprocess;
pub mod record;
pub mod retry;
pub mod url_model;

pub use error::{ScrapeError, SkipReason};
pub use record::ProfileRecord;
