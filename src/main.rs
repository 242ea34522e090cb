//! Application entry point.
//!
//! Parses command-line arguments and delegates execution to [`runner::run`].

use clap::Parser;
use locale_match::{cli::Cli, runner};
use runner::{EXIT_ERROR, EXIT_NO_MATCH, Outcome};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let max_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::ERROR
    };
    fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();
    match runner::run(&cli) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::NoMatch) => ExitCode::from(EXIT_NO_MATCH),
        Err(err) => {
            tracing::error!(error = %format_args!("{err:#}"), "command failed");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
