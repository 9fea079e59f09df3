//! Subcommands

use std::{io, sync::Arc};

use takaful::{
    catalog::Catalog,
    fixtures::{builtin_catalog, load_catalog},
};
use tracing::debug;

use crate::{
    config::{Cli, Command},
    errors::CliError,
};

mod cart;
mod listing;

/// Run the parsed command, writing its output to `out`.
pub(crate) fn run(cli: Cli, out: impl io::Write) -> Result<(), CliError> {
    let catalog = Arc::new(match &cli.catalog {
        Some(path) => {
            debug!(path = %path.display(), "loading catalog fixture");

            load_catalog(path)?
        }
        None => builtin_catalog()?,
    });

    execute(&cli.command, &catalog, out)
}

fn execute(
    command: &Command,
    catalog: &Arc<Catalog>,
    out: impl io::Write,
) -> Result<(), CliError> {
    match command {
        Command::Catalog { category } => {
            listing::write_products(out, catalog, &catalog.products_in(*category))
        }
        Command::Bestsellers => listing::write_products(out, catalog, &catalog.bestsellers()),
        Command::NewArrivals => listing::write_products(out, catalog, &catalog.new_arrivals()),
        Command::Cart(args) => cart::run(args, Arc::clone(catalog), out),
    }
}
