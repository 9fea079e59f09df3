//! Cart Store
//!
//! [`CartStore`] is the single owner of a session's cart. Screens hold a handle to one store
//! instance and either call its operations directly or subscribe to its [`CartEvent`]s.
//!
//! ```
//! use std::sync::Arc;
//!
//! use takaful::{fixtures::builtin_catalog, store::CartStore};
//!
//! let catalog = Arc::new(builtin_catalog()?);
//! let mut store = CartStore::new(catalog);
//!
//! store.add_to_cart("w1")?;
//! store.add_to_cart("w1")?;
//! store.add_to_cart("wl1")?;
//!
//! assert_eq!(store.cart_item_count(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{fmt, sync::Arc};

use rusty_money::{Money, iso::Currency};
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, CartLine},
    catalog::Catalog,
    pricing::TotalPriceError,
};

new_key_type! {
    /// Handle returned by [`CartStore::subscribe`].
    pub struct SubscriptionKey;
}

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The product identifier is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The line is already at the largest representable quantity.
    #[error("Quantity for {0} cannot be increased any further")]
    QuantityOverflow(String),

    /// The cart total could not be computed.
    #[error(transparent)]
    Total(#[from] TotalPriceError),
}

/// A change made to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A unit was added; `quantity` is the line's new quantity.
    Added {
        /// Product identifier
        product_id: String,
        /// New line quantity
        quantity: u32,
    },

    /// A line's quantity was set.
    QuantityChanged {
        /// Product identifier
        product_id: String,
        /// New line quantity
        quantity: u32,
    },

    /// A line was removed.
    Removed {
        /// Product identifier
        product_id: String,
    },

    /// Every line was removed.
    Cleared,
}

type Subscriber = Box<dyn FnMut(&CartEvent, &Cart) + Send + Sync>;

/// Cart Store
pub struct CartStore {
    catalog: Arc<Catalog>,
    cart: Cart,
    subscribers: SlotMap<SubscriptionKey, Subscriber>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            subscribers: SlotMap::with_key(),
        }
    }

    /// Register a callback invoked after every change to the cart.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&CartEvent, &Cart) + Send + Sync + 'static,
    ) -> SubscriptionKey {
        self.subscribers.insert(Box::new(subscriber))
    }

    /// Stop notifying a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.subscribers.remove(key).is_some()
    }

    /// Add one unit of a product.
    ///
    /// # Errors
    ///
    /// - [`CartError::ProductNotFound`]: the identifier is not in the catalog.
    /// - [`CartError::QuantityOverflow`]: the line cannot grow any further.
    pub fn add_to_cart(&mut self, product_id: &str) -> Result<u32, CartError> {
        if !self.catalog.contains(product_id) {
            return Err(CartError::ProductNotFound(product_id.to_string()));
        }

        let quantity = self
            .cart
            .add(product_id)
            .ok_or_else(|| CartError::QuantityOverflow(product_id.to_string()))?;

        debug!(product_id, quantity, "added to cart");

        self.notify(&CartEvent::Added {
            product_id: product_id.to_string(),
            quantity,
        });

        Ok(quantity)
    }

    /// Remove a product's line; does nothing if it has none.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        if self.cart.remove(product_id) {
            debug!(product_id, "removed from cart");

            self.notify(&CartEvent::Removed {
                product_id: product_id.to_string(),
            });
        }
    }

    /// Set a line's quantity exactly. Zero or less removes the line.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        match self.cart.set_quantity(product_id, quantity) {
            Some(0) => {
                debug!(product_id, "quantity dropped to zero, line removed");

                self.notify(&CartEvent::Removed {
                    product_id: product_id.to_string(),
                });
            }
            Some(quantity) => {
                debug!(product_id, quantity, "quantity updated");

                self.notify(&CartEvent::QuantityChanged {
                    product_id: product_id.to_string(),
                    quantity,
                });
            }
            None => {}
        }
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        if self.cart.clear() {
            debug!("cart cleared");

            self.notify(&CartEvent::Cleared);
        }
    }

    /// Sum of current price × quantity. Zero for an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Total`] if the total overflows.
    pub fn cart_total(&self) -> Result<Money<'static, Currency>, CartError> {
        Ok(self.cart.total(&self.catalog)?)
    }

    /// Sum of line quantities, as shown on cart badges.
    pub fn cart_item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// The cart itself.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Catalog used for validation and totals.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn notify(&mut self, event: &CartEvent) {
        for subscriber in self.subscribers.values_mut() {
            subscriber(event, &self.cart);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rusty_money::iso::PKR;
    use testresult::TestResult;

    use crate::fixtures::builtin_catalog;

    use super::*;

    fn store() -> TestResult<CartStore> {
        Ok(CartStore::new(Arc::new(builtin_catalog()?)))
    }

    fn recorded(store: &mut CartStore) -> Arc<Mutex<Vec<CartEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);

        store.subscribe(move |event, _cart| {
            if let Ok(mut events) = sink.lock() {
                events.push(event.clone());
            }
        });

        events
    }

    fn snapshot(events: &Arc<Mutex<Vec<CartEvent>>>) -> Vec<CartEvent> {
        events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    #[test]
    fn add_unknown_product_is_rejected() -> TestResult {
        let mut store = store()?;

        assert_eq!(
            store.add_to_cart("nope"),
            Err(CartError::ProductNotFound("nope".to_string()))
        );
        assert!(store.is_empty());

        Ok(())
    }

    #[test]
    fn repeated_adds_increment_one_line() -> TestResult {
        let mut store = store()?;

        for _ in 0..4 {
            store.add_to_cart("b1")?;
        }

        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.cart().quantity_of("b1"), 4);

        Ok(())
    }

    #[test]
    fn scenario_total_and_count() -> TestResult {
        let mut store = store()?;

        store.add_to_cart("w1")?;
        store.add_to_cart("w1")?;
        store.add_to_cart("wl1")?;

        assert_eq!(store.cart_total()?, Money::from_major(26_800, PKR));
        assert_eq!(store.cart_item_count(), 3);

        Ok(())
    }

    #[test]
    fn subscribers_see_every_change() -> TestResult {
        let mut store = store()?;
        let events = recorded(&mut store);

        store.add_to_cart("w1")?;
        store.update_quantity("w1", 3);
        store.update_quantity("w1", 0);
        store.add_to_cart("b1")?;
        store.clear_cart();

        assert_eq!(
            snapshot(&events),
            [
                CartEvent::Added {
                    product_id: "w1".to_string(),
                    quantity: 1
                },
                CartEvent::QuantityChanged {
                    product_id: "w1".to_string(),
                    quantity: 3
                },
                CartEvent::Removed {
                    product_id: "w1".to_string()
                },
                CartEvent::Added {
                    product_id: "b1".to_string(),
                    quantity: 1
                },
                CartEvent::Cleared,
            ]
        );

        Ok(())
    }

    #[test]
    fn no_op_calls_do_not_notify() -> TestResult {
        let mut store = store()?;
        let events = recorded(&mut store);

        store.remove_from_cart("w1");
        store.update_quantity("w1", 2);
        store.update_quantity("w1", -1);
        store.clear_cart();

        let _rejected = store.add_to_cart("nope");

        assert!(snapshot(&events).is_empty());

        Ok(())
    }

    #[test]
    fn unsubscribe_stops_notifications() -> TestResult {
        let mut store = store()?;
        let events = Arc::new(Mutex::new(0_usize));
        let sink = Arc::clone(&events);

        let key = store.subscribe(move |_event, _cart| {
            if let Ok(mut count) = sink.lock() {
                *count += 1;
            }
        });

        store.add_to_cart("w1")?;

        assert!(store.unsubscribe(key));
        assert!(!store.unsubscribe(key));

        store.add_to_cart("w1")?;

        assert_eq!(events.lock().map(|count| *count).unwrap_or_default(), 1);

        Ok(())
    }

    #[test]
    fn subscriber_sees_cart_after_change() -> TestResult {
        let mut store = store()?;
        let counts = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&counts);

        store.subscribe(move |_event, cart| {
            if let Ok(mut counts) = sink.lock() {
                counts.push(cart.item_count());
            }
        });

        store.add_to_cart("w1")?;
        store.add_to_cart("wl1")?;
        store.update_quantity("wl1", 4);

        assert_eq!(
            counts.lock().map(|counts| counts.clone()).unwrap_or_default(),
            [1, 2, 5]
        );

        Ok(())
    }
}
