//! promptcast: turn versioned prompt definitions into published documents.
//!
//! This is the main entry point for the `promptcast` CLI. It parses
//! arguments, sets up logging, dispatches to the command handler, and maps
//! errors to exit codes.

mod aws;
mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod inference;
mod logging;
pub mod pipeline;
pub mod prompt;
pub mod publish;
pub mod settings;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(&cli.log_level);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
