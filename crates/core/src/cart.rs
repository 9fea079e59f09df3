//! Cart
//!
//! A cart is an ordered list of lines, at most one per product. Lines reference products by
//! identifier only; prices are looked up in the [`Catalog`] when totals are computed.

use rusty_money::{Money, iso::Currency};

use crate::{
    catalog::Catalog,
    pricing::{TotalPriceError, line_total_minor},
};

/// One product identifier and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product_id: String,
    quantity: u32,
}

impl CartLine {
    /// Identifier of the product on this line.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, returning the line's new quantity.
    ///
    /// Returns `None` if the line is already at `u32::MAX`; the cart is unchanged in that case.
    pub fn add(&mut self, product_id: &str) -> Option<u32> {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = line.quantity.checked_add(1)?;

            return Some(line.quantity);
        }

        self.lines.push(CartLine {
            product_id: product_id.to_string(),
            quantity: 1,
        });

        Some(1)
    }

    /// Remove a product's line. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| line.product_id != product_id);

        self.lines.len() != before
    }

    /// Set a line's quantity exactly; zero or less removes the line.
    ///
    /// Products without a line are left alone. Returns the new quantity when the line changed
    /// and `Some(0)` when it was removed.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> Option<u32> {
        if quantity <= 0 {
            return self.remove(product_id).then_some(0);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let line = self.line_mut(product_id)?;

        if line.quantity == quantity {
            return None;
        }

        line.quantity = quantity;

        Some(quantity)
    }

    /// Remove every line. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_lines = !self.lines.is_empty();

        self.lines.clear();

        had_lines
    }

    /// Quantity of a product, zero if it has no line.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.line(product_id).map_or(0, CartLine::quantity)
    }

    /// Line for a product.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units (sum of quantities, not number of lines).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of current price × quantity over every line.
    ///
    /// Lines whose product is not in `catalog` contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::Overflow`] if the total does not fit in minor units.
    pub fn total(&self, catalog: &Catalog) -> Result<Money<'static, Currency>, TotalPriceError> {
        let total_minor = self.lines.iter().try_fold(0_i64, |acc, line| {
            let Some(product) = catalog.get(&line.product_id) else {
                return Ok(acc);
            };

            let line_total = line_total_minor(&product.price, line.quantity)?;

            acc.checked_add(line_total).ok_or(TotalPriceError::Overflow)
        })?;

        Ok(Money::from_minor(total_minor, catalog.currency()))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::PKR;
    use testresult::TestResult;

    use crate::fixtures::builtin_catalog;

    use super::*;

    #[test]
    fn add_creates_then_increments() {
        let mut cart = Cart::new();

        assert_eq!(cart.add("w1"), Some(1));
        assert_eq!(cart.add("w1"), Some(2));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("w1"), 2);
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut cart = Cart::new();

        cart.add("wl1");
        cart.add("w1");
        cart.add("wl1");

        let ids: Vec<&str> = cart.lines().iter().map(CartLine::product_id).collect();

        assert_eq!(ids, ["wl1", "w1"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new();

        cart.add("w1");

        assert!(cart.remove("w1"));
        assert!(!cart.remove("w1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_is_exact() {
        let mut cart = Cart::new();

        cart.add("w1");

        assert_eq!(cart.set_quantity("w1", 5), Some(5));
        assert_eq!(cart.quantity_of("w1"), 5);
        assert_eq!(cart.set_quantity("w1", 5), None);
    }

    #[test]
    fn set_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();

        cart.add("w1");
        cart.add("b1");

        assert_eq!(cart.set_quantity("w1", 0), Some(0));
        assert_eq!(cart.set_quantity("b1", -1), Some(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_never_creates_lines() {
        let mut cart = Cart::new();

        assert_eq!(cart.set_quantity("w1", 3), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_saturates_huge_values() {
        let mut cart = Cart::new();

        cart.add("w1");
        cart.set_quantity("w1", i64::MAX);

        assert_eq!(cart.quantity_of("w1"), u32::MAX);
    }

    #[test]
    fn add_at_max_quantity_is_rejected() {
        let mut cart = Cart::new();

        cart.add("w1");
        cart.set_quantity("w1", i64::from(u32::MAX));

        assert_eq!(cart.add("w1"), None);
        assert_eq!(cart.quantity_of("w1"), u32::MAX);
    }

    #[test]
    fn item_count_sums_quantities() {
        let mut cart = Cart::new();

        cart.add("w1");
        cart.set_quantity("w1", 3);
        cart.add("b1");
        cart.set_quantity("b1", 2);

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn clear_reports_whether_anything_changed() {
        let mut cart = Cart::new();

        assert!(!cart.clear());

        cart.add("w1");

        assert!(cart.clear());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn total_uses_current_price() -> TestResult {
        let catalog = builtin_catalog()?;
        let mut cart = Cart::new();

        cart.add("w1");
        cart.add("w1");
        cart.add("wl1");

        assert_eq!(cart.total(&catalog)?, Money::from_major(26_800, PKR));

        Ok(())
    }

    #[test]
    fn total_of_empty_cart_is_zero() -> TestResult {
        let catalog = builtin_catalog()?;

        assert_eq!(Cart::new().total(&catalog)?, Money::from_minor(0, PKR));

        Ok(())
    }

    #[test]
    fn total_skips_products_missing_from_catalog() -> TestResult {
        let catalog = builtin_catalog()?;
        let mut cart = Cart::new();

        cart.add("discontinued");
        cart.add("b3");

        assert_eq!(cart.total(&catalog)?, Money::from_major(1_500, PKR));

        Ok(())
    }
}
