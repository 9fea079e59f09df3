//! Takaful Market storefront CLI
//!
//! Lists the catalog and replays cart operations against the same store the web app uses.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use tracing::error;

mod commands;
mod config;
mod errors;
mod logging;

use crate::{config::Cli, errors::CliError};

fn main() -> ExitCode {
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");

            _ = writeln!(io::stderr(), "{err}");

            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    logging::init_subscriber(&cli.logging)?;

    commands::run(cli, io::stdout().lock())
}
