//! Shipped catalog and storefront copy

use takaful::fixtures::{builtin_catalog, builtin_content};
use takaful::prelude::*;
use testresult::TestResult;

fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|product| product.id.clone()).collect()
}

#[test]
fn all_returns_every_product_in_order() -> TestResult {
    let catalog = builtin_catalog()?;

    assert_eq!(
        ids(&catalog.products_by_category("all")),
        ["w1", "w2", "w3", "w4", "b1", "b2", "b3", "wl1", "wl2", "wl3", "wl4"]
    );

    Ok(())
}

#[test]
fn belts_returns_only_belts() -> TestResult {
    let catalog = builtin_catalog()?;
    let belts = catalog.products_by_category("belts");

    assert_eq!(ids(&belts), ["b1", "b2", "b3"]);
    assert!(belts.iter().all(|product| product.category == Category::Belts));

    Ok(())
}

#[test]
fn rails_follow_flags() -> TestResult {
    let catalog = builtin_catalog()?;

    assert_eq!(
        ids(&catalog.bestsellers()),
        ["w1", "w3", "b1", "wl1", "wl4"]
    );
    assert_eq!(ids(&catalog.new_arrivals()), ["w2", "w4", "b2", "wl2"]);

    Ok(())
}

#[test]
fn discount_badges_for_marked_down_products() -> TestResult {
    let catalog = builtin_catalog()?;

    let w1 = catalog.get("w1").ok_or("w1 missing")?;
    let wl1 = catalog.get("wl1").ok_or("wl1 missing")?;

    assert_eq!(w1.discount_percent(), Some(31));
    assert_eq!(wl1.discount_percent(), Some(28));

    for product in catalog.iter() {
        if product.original_price.is_none() {
            assert_eq!(product.discount_percent(), None, "{}", product.id);
        }
    }

    Ok(())
}

#[test]
fn category_chips_cover_catalog() -> TestResult {
    let catalog = builtin_catalog()?;
    let content = builtin_content()?;

    let covered: usize = content
        .categories
        .iter()
        .filter(|chip| chip.id != CategoryFilter::All)
        .map(|chip| catalog.products_in(chip.id).len())
        .sum();

    assert_eq!(covered, catalog.len());

    Ok(())
}
