//! CLI errors

use std::io;

use takaful::prelude::{CartError, CheckoutError, FixtureError, ReceiptError};
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Errors that end a CLI run with a non-zero exit code.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Failed to install the logging subscriber.
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] TryInitError),

    /// The catalog fixture could not be loaded.
    #[error("failed to load catalog: {0}")]
    Fixture(#[from] FixtureError),

    /// A cart operation was rejected.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Checkout failed.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// The receipt could not be built or printed.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
