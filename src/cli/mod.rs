//! Command Line Interface (CLI) layer for iconkit.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `slice` and `resize`
//! subcommands. It wires user-provided options to the underlying library
//! functionality exposed via `iconkit::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::{init_logging, run};
