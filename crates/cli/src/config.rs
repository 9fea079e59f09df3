//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use takaful::products::CategoryFilter;

/// Takaful Market storefront CLI
#[derive(Debug, Parser)]
#[command(name = "takaful", about = "Takaful Market storefront CLI", long_about = None)]
pub(crate) struct Cli {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog fixture to load instead of the built-in catalog.
    #[arg(long, env = "TAKAFUL_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List the catalog, optionally filtered by category.
    Catalog {
        /// Category to show (all, watches, belts, wallets, accessories)
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },

    /// List bestsellers.
    Bestsellers,

    /// List new arrivals.
    NewArrivals,

    /// Build a cart and print its receipt.
    Cart(CartArgs),
}

/// Cart operations, applied in order: adds, then sets, then removes.
#[derive(Debug, Args)]
pub(crate) struct CartArgs {
    /// Add one unit of a product; repeat to add more
    #[arg(long = "add", value_name = "ID")]
    pub adds: Vec<String>,

    /// Set a line's quantity exactly; zero or less removes it
    #[arg(long = "set", value_name = "ID=QTY", value_parser = parse_quantity)]
    pub sets: Vec<(String, i64)>,

    /// Remove a product's line
    #[arg(long = "remove", value_name = "ID")]
    pub removes: Vec<String>,

    /// Place the order after printing the receipt
    #[arg(long)]
    pub checkout: bool,
}

fn parse_quantity(value: &str) -> Result<(String, i64), String> {
    let (id, quantity) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got {value}"))?;

    if id.is_empty() {
        return Err(format!("missing product id in {value}"));
    }

    let quantity = quantity
        .trim()
        .parse()
        .map_err(|error| format!("invalid quantity in {value}: {error}"))?;

    Ok((id.to_string(), quantity))
}
