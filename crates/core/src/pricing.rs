//! Prices

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors that can occur while calculating totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotalPriceError {
    /// A line total or running sum did not fit in minor units.
    #[error("total overflowed minor units")]
    Overflow,
}

/// Multiply a unit price by a quantity, in minor units.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the line total does not fit in an `i64`.
pub fn line_total_minor(price: &Money<'_, Currency>, quantity: u32) -> Result<i64, TotalPriceError> {
    price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(TotalPriceError::Overflow)
}

/// Format money the way the storefront shows it, e.g. `Rs. 12,500`.
pub fn format_price(money: &Money<'_, Currency>) -> String {
    format_minor(money.to_minor_units(), money.currency())
}

/// Format a minor-unit amount in `currency`.
///
/// Major units get thousands separators and the fractional part is only shown when it is
/// non-zero.
pub fn format_minor(minor_units: i64, currency: &Currency) -> String {
    let abs_minor = minor_units.unsigned_abs();
    let major_units = abs_minor / 100;
    let fractional = abs_minor % 100;
    let sign = if minor_units < 0 { "-" } else { "" };

    let amount = if fractional == 0 {
        group_thousands(major_units)
    } else {
        format!("{}.{fractional:02}", group_thousands(major_units))
    };

    match currency.iso_alpha_code {
        "PKR" => format!("{sign}Rs. {amount}"),
        "GBP" => format!("{sign}£{amount}"),
        "USD" => format!("{sign}${amount}"),
        "EUR" => format!("{sign}€{amount}"),
        code => format!("{sign}{amount} {code}"),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    grouped
}
