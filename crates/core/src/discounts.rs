//! Discounts
//!
//! Display discounts are derived from a product's original and current price every time they
//! are shown; they are never stored.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, iso::Currency};

/// Fraction of `original` saved when paying `price`.
///
/// Returns `None` when there is no markdown: no original price, an original price that is not
/// above the current price, or prices in different currencies.
pub fn markdown_fraction(
    price: &Money<'_, Currency>,
    original: Option<&Money<'_, Currency>>,
) -> Option<Percentage> {
    let original = original?;

    if original.currency() != price.currency() {
        return None;
    }

    let original_minor = original.to_minor_units();
    let price_minor = price.to_minor_units();

    if original_minor <= price_minor || original_minor <= 0 {
        return None;
    }

    let saved = Decimal::from_i64(original_minor.checked_sub(price_minor)?)?;
    let original = Decimal::from_i64(original_minor)?;

    Some(Percentage::from(saved.checked_div(original)?))
}

/// Display discount in whole percentage points, rounded half away from zero.
///
/// An Rs. 18,000 watch selling for Rs. 12,500 is shown as 31% off.
pub fn discount_percent(
    price: &Money<'_, Currency>,
    original: Option<&Money<'_, Currency>>,
) -> Option<u32> {
    let fraction = markdown_fraction(price, original)?;
    let points = (fraction * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    points.to_u32().filter(|points| *points > 0)
}

/// Badge text for a discount, e.g. `-31%`.
pub fn discount_badge(points: u32) -> String {
    format!("-{points}%")
}
