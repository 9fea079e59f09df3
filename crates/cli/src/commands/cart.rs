//! Cart replay and checkout

use std::{io, sync::Arc};

use takaful::{
    catalog::Catalog,
    checkout::{OrderConfirmation, checkout},
    receipt::Receipt,
    store::CartStore,
};
use tracing::info;

use crate::{config::CartArgs, errors::CliError};

pub(super) fn run(
    args: &CartArgs,
    catalog: Arc<Catalog>,
    mut out: impl io::Write,
) -> Result<(), CliError> {
    let mut store = CartStore::new(catalog);

    for id in &args.adds {
        store.add_to_cart(id)?;
    }

    for (id, quantity) in &args.sets {
        store.update_quantity(id, *quantity);
    }

    for id in &args.removes {
        store.remove_from_cart(id);
    }

    info!(
        lines = store.lines().len(),
        items = store.cart_item_count(),
        "cart built"
    );

    Receipt::from_store(&store)?.write_to(&mut out)?;

    if args.checkout {
        let confirmation = checkout(&mut store)?;

        writeln!(out, "{}", OrderConfirmation::TITLE)?;
        writeln!(out, "{}", confirmation.message())?;
        writeln!(out, "Items in cart: {}", store.cart_item_count())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use takaful::{fixtures::builtin_catalog, store::CartError};
    use testresult::TestResult;

    use super::*;

    fn args(adds: &[&str], sets: &[(&str, i64)], checkout: bool) -> CartArgs {
        CartArgs {
            adds: adds.iter().map(ToString::to_string).collect(),
            sets: sets
                .iter()
                .map(|(id, quantity)| ((*id).to_string(), *quantity))
                .collect(),
            removes: Vec::new(),
            checkout,
        }
    }

    #[test]
    fn checkout_prints_confirmation() -> TestResult {
        let catalog = Arc::new(builtin_catalog()?);
        let mut out = Vec::new();

        run(&args(&["w1", "w1", "wl1"], &[], true), catalog, &mut out)?;

        let printed = String::from_utf8(out)?;

        assert!(printed.contains("Order Placed!"));
        assert!(printed.contains("Your order of Rs. 26,800 has been placed successfully!"));
        assert!(printed.contains("Items in cart: 0"));

        Ok(())
    }

    #[test]
    fn sets_apply_after_adds() -> TestResult {
        let catalog = Arc::new(builtin_catalog()?);
        let mut out = Vec::new();

        run(&args(&["b3"], &[("b3", 4)], false), catalog, &mut out)?;

        assert!(String::from_utf8(out)?.contains("Rs. 6,000"));

        Ok(())
    }

    #[test]
    fn unknown_product_fails() -> TestResult {
        let catalog = Arc::new(builtin_catalog()?);
        let mut out = Vec::new();

        let result = run(&args(&["zz"], &[], false), catalog, &mut out);

        assert!(matches!(
            result,
            Err(CliError::Cart(CartError::ProductNotFound(id))) if id == "zz"
        ));

        Ok(())
    }

    #[test]
    fn checkout_of_empty_cart_fails() -> TestResult {
        let catalog = Arc::new(builtin_catalog()?);
        let mut out = Vec::new();

        let result = run(&args(&["w1"], &[("w1", 0)], true), catalog, &mut out);

        assert!(matches!(result, Err(CliError::Checkout(_))));

        Ok(())
    }
}
