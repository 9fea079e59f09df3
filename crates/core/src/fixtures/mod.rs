//! Fixtures
//!
//! The catalog and the storefront copy ship as YAML fixtures embedded in the binary.

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, PKR, USD};
use thiserror::Error;

use crate::{catalog::Catalog, content::StorefrontContent};

pub mod catalog;

/// Embedded catalog fixture.
pub const CATALOG_YAML: &str = include_str!("../../../../fixtures/catalog/takaful.yml");

/// Embedded storefront content fixture.
pub const CONTENT_YAML: &str = include_str!("../../../../fixtures/content/takaful.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The parsed products do not form a valid catalog
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),
}

/// Parse the embedded catalog.
///
/// # Errors
///
/// Returns an error if the embedded YAML is malformed or describes an invalid catalog.
pub fn builtin_catalog() -> Result<Catalog, FixtureError> {
    catalog::parse_catalog(CATALOG_YAML)
}

/// Parse the embedded storefront content.
///
/// # Errors
///
/// Returns an error if the embedded YAML is malformed.
pub fn builtin_content() -> Result<StorefrontContent, FixtureError> {
    parse_content(CONTENT_YAML)
}

/// Parse storefront content from YAML.
///
/// # Errors
///
/// Returns an error if the YAML does not match the content schema.
pub fn parse_content(yaml: &str) -> Result<StorefrontContent, FixtureError> {
    Ok(serde_norway::from_str(yaml)?)
}

/// Load a catalog fixture from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not describe a valid catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, FixtureError> {
    let contents = fs::read_to_string(path)?;

    catalog::parse_catalog(&contents)
}

/// Parse price string (e.g., "12500 PKR") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "PKR" => PKR,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
