//! Cart store behaviour against the shipped catalog

use std::sync::Arc;

use rusty_money::{Money, iso::PKR};
use takaful::prelude::*;
use takaful::{fixtures::builtin_catalog, receipt::Receipt};
use testresult::TestResult;

fn store() -> TestResult<CartStore> {
    Ok(CartStore::new(Arc::new(builtin_catalog()?)))
}

#[test]
fn repeated_adds_count_calls_on_one_line() -> TestResult {
    for calls in 1..=6_u32 {
        let mut store = store()?;

        for _ in 0..calls {
            store.add_to_cart("w3")?;
        }

        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.cart().quantity_of("w3"), calls);
    }

    Ok(())
}

#[test]
fn zero_and_negative_quantities_remove_the_line() -> TestResult {
    let mut store = store()?;

    store.add_to_cart("w1")?;
    store.add_to_cart("b2")?;

    store.update_quantity("w1", 0);
    store.update_quantity("b2", -1);

    assert!(store.is_empty());

    Ok(())
}

#[test]
fn total_is_sum_of_price_times_quantity() -> TestResult {
    let mut store = store()?;

    assert_eq!(store.cart_total()?, Money::from_minor(0, PKR));

    store.add_to_cart("b1")?;
    store.update_quantity("b1", 3);
    store.add_to_cart("wl2")?;
    store.update_quantity("wl2", 2);

    let expected: i64 = store
        .lines()
        .iter()
        .filter_map(|line| {
            let product = store.catalog().get(line.product_id())?;

            Some(product.price.to_minor_units() * i64::from(line.quantity()))
        })
        .sum();

    assert_eq!(store.cart_total()?, Money::from_minor(expected, PKR));
    assert_eq!(store.cart_item_count(), 5);
    assert_eq!(store.lines().len(), 2);

    Ok(())
}

#[test]
fn clear_resets_total_and_count() -> TestResult {
    let mut store = store()?;

    store.add_to_cart("w1")?;
    store.add_to_cart("wl4")?;
    store.clear_cart();

    assert_eq!(store.cart_total()?, Money::from_minor(0, PKR));
    assert_eq!(store.cart_item_count(), 0);
    assert!(store.is_empty());

    Ok(())
}

#[test]
fn scenario_checkout() -> TestResult {
    let mut store = store()?;

    store.add_to_cart("w1")?;
    store.add_to_cart("w1")?;
    store.add_to_cart("wl1")?;

    assert_eq!(store.cart_total()?, Money::from_major(26_800, PKR));
    assert_eq!(store.cart_item_count(), 3);
    assert_eq!(format_price(&store.cart_total()?), "Rs. 26,800");

    let receipt = Receipt::from_store(&store)?;

    assert_eq!(receipt.total(), &Money::from_major(26_800, PKR));

    let confirmation = checkout(&mut store)?;

    assert_eq!(OrderConfirmation::TITLE, "Order Placed!");
    assert_eq!(
        confirmation.message(),
        "Your order of Rs. 26,800 has been placed successfully!"
    );
    assert!(store.is_empty());
    assert_eq!(checkout(&mut store), Err(CheckoutError::EmptyCart));

    Ok(())
}

#[test]
fn unknown_products_never_enter_the_cart() -> TestResult {
    let mut store = store()?;

    assert_eq!(
        store.add_to_cart("x9"),
        Err(CartError::ProductNotFound("x9".to_string()))
    );
    assert_eq!(store.cart_item_count(), 0);

    Ok(())
}
