//! seqren CLI entrypoint.
//!
//! Parses arguments, runs one rename pass through the `cli` module and maps
//! failures to a single diagnostic line and a non-zero exit status.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("An error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}
