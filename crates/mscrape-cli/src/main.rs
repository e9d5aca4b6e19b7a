mod cli;

use crate::cli::Cli;

fn main() {
    // Parse CLI and dispatch; each command sets up logging itself.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("mscrape error: {:#}", err);
        std::process::exit(1);
    }
}
