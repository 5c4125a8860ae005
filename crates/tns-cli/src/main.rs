//! tns - FROSTT tensor tooling
//!
//! Usage:
//!   tns stats tensor.tns.gz            # Summarize a tensor file
//!   tns stats tensor.tns --json        # Same, as JSON
//!   tns build -t tensor.tns.gz ...     # Build the dataset page

use clap::Parser;
use std::process::ExitCode;

use tns_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match tns_cli::execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
