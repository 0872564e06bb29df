//! iconkit CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, dispatch to the
//! `slice` or `resize` run, log any failure once and exit with the matching status.
//! For programmatic use, prefer the library API (`iconkit::api`).

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    cli::init_logging(args.log);

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
