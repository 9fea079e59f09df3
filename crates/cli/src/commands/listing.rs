//! Product listings

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use takaful::{
    catalog::Catalog, discounts::discount_badge, pricing::format_price, products::Product,
};

use crate::errors::CliError;

pub(super) fn write_products(
    mut out: impl io::Write,
    catalog: &Catalog,
    products: &[&Product],
) -> Result<(), CliError> {
    if products.is_empty() {
        writeln!(out, "No products found")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Category", "Price", "Discount", "Rating", "Flags"]);

    for product in products {
        builder.push_record([
            product.id.clone(),
            product.name.clone(),
            product.category.display_name().to_string(),
            format_price(&product.price),
            product
                .discount_percent()
                .map(discount_badge)
                .unwrap_or_default(),
            format!("{:.1} ({})", product.rating, product.reviews),
            flags(product),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..6), Alignment::right());

    writeln!(out, "{table}")?;
    writeln!(out, "{} of {} products", products.len(), catalog.len())?;

    Ok(())
}

fn flags(product: &Product) -> String {
    let mut flags = Vec::new();

    if product.is_new {
        flags.push("NEW");
    }

    if product.is_bestseller {
        flags.push("BESTSELLER");
    }

    if !product.in_stock {
        flags.push("OUT OF STOCK");
    }

    flags.join(", ")
}

#[cfg(test)]
mod tests {
    use takaful::{
        fixtures::builtin_catalog,
        products::{Category, CategoryFilter},
    };
    use testresult::TestResult;

    use super::*;

    #[test]
    fn table_shows_prices_and_discounts() -> TestResult {
        let catalog = builtin_catalog()?;
        let mut out = Vec::new();

        write_products(&mut out, &catalog, &catalog.products_by_category("watches"))?;

        let printed = String::from_utf8(out)?;

        assert!(printed.contains("Rs. 12,500"));
        assert!(printed.contains("-31%"));
        assert!(printed.contains("4 of 11 products"));
        assert!(!printed.contains("b1"));

        Ok(())
    }

    #[test]
    fn empty_listing_says_so() -> TestResult {
        let catalog = builtin_catalog()?;
        let mut out = Vec::new();

        write_products(
            &mut out,
            &catalog,
            &catalog.products_in(CategoryFilter::Only(Category::Accessories)),
        )?;

        assert_eq!(String::from_utf8(out)?, "No products found\n");

        Ok(())
    }

    #[test]
    fn flags_join_in_order() -> TestResult {
        let catalog = builtin_catalog()?;
        let w1 = catalog.get("w1").ok_or("w1 missing")?;
        let b3 = catalog.get("b3").ok_or("b3 missing")?;

        assert_eq!(flags(w1), "BESTSELLER");
        assert_eq!(flags(b3), "");

        Ok(())
    }
}
