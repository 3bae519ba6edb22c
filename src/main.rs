//! osbconfig: build step that packages Oracle Service Bus configuration
//! jars via the vendor configjar tool.
//!
//! This is the main entry point for the `osbconfig` CLI. It installs the
//! tracing subscriber, parses arguments, dispatches to the appropriate
//! command handler, and handles errors with proper exit codes.

mod cli;
mod commands;
mod error;
mod events;
mod exit_codes;
mod invoke;
mod resolve;
mod settings;
mod store;

use cli::Cli;
use std::error::Error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print the error and its cause chain to stderr.
            eprintln!("Error: {}", err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {}", cause);
                source = cause.source();
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Install the stderr tracing subscriber, filtered by RUST_LOG with an
/// `info` default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
