//! Receipt

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    discounts::{discount_badge, discount_percent},
    pricing::{TotalPriceError, format_minor, line_total_minor},
    store::CartStore,
};

/// Errors that can occur when building or printing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating a line or cart total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// A cart line refers to a product the catalog does not have.
    #[error("Missing product: {0}")]
    MissingProduct(String),

    /// IO error
    #[error("IO error")]
    IO,
}

/// One cart line as printed on the receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    /// Product identifier
    pub product_id: String,
    /// Product name
    pub name: String,
    /// Units ordered
    pub quantity: u32,
    /// Current unit price
    pub unit_price: Money<'static, Currency>,
    /// Unit price before markdown
    pub original_price: Option<Money<'static, Currency>>,
    /// Unit price × quantity
    pub line_total: Money<'static, Currency>,
}

/// Itemised summary of a cart.
#[derive(Debug, Clone)]
pub struct Receipt {
    lines: SmallVec<[ReceiptLine; 8]>,

    /// Total at pre-markdown prices
    subtotal: Money<'static, Currency>,

    /// Total at current prices
    total: Money<'static, Currency>,

    currency: &'static Currency,
}

impl Receipt {
    /// Build a receipt for the store's current cart.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if a line's product is missing from the catalog or a total
    /// overflows.
    pub fn from_store(store: &CartStore) -> Result<Self, ReceiptError> {
        let catalog = store.catalog();
        let currency = catalog.currency();

        let mut lines = SmallVec::new();
        let mut subtotal_minor = 0_i64;
        let mut total_minor = 0_i64;

        for line in store.lines() {
            let product = catalog
                .get(line.product_id())
                .ok_or_else(|| ReceiptError::MissingProduct(line.product_id().to_string()))?;

            let list_price = product.was_price().unwrap_or(&product.price);
            let line_total = line_total_minor(&product.price, line.quantity())?;
            let list_total = line_total_minor(list_price, line.quantity())?;

            total_minor = total_minor
                .checked_add(line_total)
                .ok_or(TotalPriceError::Overflow)?;

            subtotal_minor = subtotal_minor
                .checked_add(list_total)
                .ok_or(TotalPriceError::Overflow)?;

            lines.push(ReceiptLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                quantity: line.quantity(),
                unit_price: product.price,
                original_price: product.was_price().copied(),
                line_total: Money::from_minor(line_total, currency),
            });
        }

        Ok(Receipt {
            lines,
            subtotal: Money::from_minor(subtotal_minor, currency),
            total: Money::from_minor(total_minor, currency),
            currency,
        })
    }

    /// Printed lines in cart order.
    #[must_use]
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Total at pre-markdown prices.
    #[must_use]
    pub fn subtotal(&self) -> &Money<'static, Currency> {
        &self.subtotal
    }

    /// Total at current prices; matches [`CartStore::cart_total`].
    #[must_use]
    pub fn total(&self) -> &Money<'static, Currency> {
        &self.total
    }

    /// Amount saved through markdowns, in minor units.
    #[must_use]
    pub fn savings_minor(&self) -> i64 {
        self.subtotal.to_minor_units() - self.total.to_minor_units()
    }

    /// Savings as a fraction of the subtotal.
    #[must_use]
    pub fn savings_percent(&self) -> Percentage {
        let subtotal_minor = self.subtotal.to_minor_units();

        if subtotal_minor == 0 {
            return Percentage::from(Decimal::ZERO);
        }

        let fraction = Decimal::from(self.savings_minor())
            .checked_div(Decimal::from(subtotal_minor))
            .unwrap_or(Decimal::ZERO);

        Percentage::from(fraction)
    }

    /// Currency used for all monetary values.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Prints the receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.lines.is_empty() {
            return writeln!(out, "\nYour cart is empty\n").map_err(|_err| ReceiptError::IO);
        }

        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Qty", "Unit Price", "Was", "Line Total"]);

        for (idx, line) in self.lines.iter().enumerate() {
            let points = discount_percent(&line.unit_price, line.original_price.as_ref());

            let was = match (&line.original_price, points) {
                (Some(original), Some(points)) => format!(
                    "{} ({})",
                    format_minor(original.to_minor_units(), self.currency),
                    discount_badge(points)
                ),
                _ => String::new(),
            };

            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                line.quantity.to_string(),
                format_minor(line.unit_price.to_minor_units(), self.currency),
                was,
                format_minor(line.line_total.to_minor_units(), self.currency),
            ]);
        }

        write_receipt_table(&mut out, builder)?;
        write_receipt_summary(&mut out, self)
    }
}

const DARK_GREY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn write_receipt_table(out: &mut impl io::Write, builder: Builder) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..6), Alignment::right());
    table.modify(Columns::one(4), Color::new(DARK_GREY, RESET));

    writeln!(out, "\n{}", shade_borders(&table.to_string())).map_err(|_err| ReceiptError::IO)
}

/// Subtotal, total and savings, right-aligned under the table. The total is bold.
fn write_receipt_summary(out: &mut impl io::Write, receipt: &Receipt) -> Result<(), ReceiptError> {
    let savings_points = (receipt.savings_percent() * Decimal::ONE_HUNDRED).round_dp(2);

    let rows = [
        ("Subtotal:", format_minor(receipt.subtotal.to_minor_units(), receipt.currency), false),
        ("Total:", format_minor(receipt.total.to_minor_units(), receipt.currency), true),
        (
            "Savings:",
            format!(
                "({savings_points}%) {}",
                format_minor(receipt.savings_minor(), receipt.currency)
            ),
            false,
        ),
    ];

    let label_width = rows.iter().map(|(label, ..)| label.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value, _)| value.chars().count()).max().unwrap_or(0);

    for (label, value, bold) in &rows {
        let line = format!(" {label:>label_width$}  {value:>value_width$}  ");

        if *bold {
            writeln!(out, "{BOLD}{line}{RESET}")
        } else {
            writeln!(out, "{line}")
        }
        .map_err(|_err| ReceiptError::IO)?;
    }

    writeln!(out).map_err(|_err| ReceiptError::IO)
}

/// Shade runs of box-drawing characters dark grey.
fn shade_borders(table: &str) -> String {
    let mut shaded = String::with_capacity(table.len() + 256);
    let mut shading = false;

    for ch in table.chars() {
        let border = ('\u{2500}'..='\u{257F}').contains(&ch);

        if border != shading {
            shaded.push_str(if border { DARK_GREY } else { RESET });
            shading = border;
        }

        shaded.push(ch);
    }

    if shading {
        shaded.push_str(RESET);
    }

    shaded
}
