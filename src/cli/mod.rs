//! Command-line interface: argument parsing, confirmation, reporting.

use anyhow::Result;

pub mod args;
pub mod exit_status;
pub mod prompt;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
