//! CLI command handlers, one per file.

mod extract;
mod normalize;
mod run;

pub use extract::run_extract;
pub use normalize::run_normalize;
pub use run::{run_scrape, RunArgs};
#[cfg(test)]
pub use run::resolve_output;
