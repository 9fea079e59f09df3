//! Checkout
//!
//! Placing an order only confirms it to the shopper and empties the cart. No payment or order
//! record leaves the process.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::info;

use crate::{
    pricing::format_price,
    store::{CartError, CartStore},
};

/// Errors that stop a checkout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("Your cart is empty")]
    EmptyCart,

    /// The order total could not be computed.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// What the shopper is shown after placing an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    total: Money<'static, Currency>,
    item_count: u64,
}

impl OrderConfirmation {
    /// Dialog title.
    pub const TITLE: &'static str = "Order Placed!";

    /// Amount charged.
    pub fn total(&self) -> &Money<'static, Currency> {
        &self.total
    }

    /// Units ordered.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Confirmation text, e.g. `Your order of Rs. 26,800 has been placed successfully!`.
    pub fn message(&self) -> String {
        format!(
            "Your order of {} has been placed successfully!",
            format_price(&self.total)
        )
    }
}

/// Place the order for everything in the cart and empty it.
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`]: the cart has no lines; nothing changes.
/// - [`CheckoutError::Cart`]: the total could not be computed; the cart is left as it was.
pub fn checkout(store: &mut CartStore) -> Result<OrderConfirmation, CheckoutError> {
    if store.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let total = store.cart_total()?;
    let item_count = store.cart_item_count();

    store.clear_cart();

    info!(
        total_minor = total.to_minor_units(),
        item_count, "order placed"
    );

    Ok(OrderConfirmation { total, item_count })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rusty_money::iso::PKR;
    use testresult::TestResult;

    use crate::fixtures::builtin_catalog;

    use super::*;

    #[test]
    fn checkout_empty_cart_fails() -> TestResult {
        let mut store = CartStore::new(Arc::new(builtin_catalog()?));

        assert_eq!(checkout(&mut store), Err(CheckoutError::EmptyCart));

        Ok(())
    }

    #[test]
    fn checkout_confirms_and_clears() -> TestResult {
        let mut store = CartStore::new(Arc::new(builtin_catalog()?));

        store.add_to_cart("w1")?;
        store.add_to_cart("w1")?;
        store.add_to_cart("wl1")?;

        let confirmation = checkout(&mut store)?;

        assert_eq!(confirmation.total(), &Money::from_major(26_800, PKR));
        assert_eq!(confirmation.item_count(), 3);
        assert_eq!(
            confirmation.message(),
            "Your order of Rs. 26,800 has been placed successfully!"
        );
        assert!(store.is_empty());
        assert_eq!(store.cart_item_count(), 0);
        assert_eq!(store.cart_total()?, Money::from_minor(0, PKR));

        Ok(())
    }
}
