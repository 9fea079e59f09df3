//! App shell state
//!
//! One [`CartStore`] per session, held in a signal and shared by every screen through
//! [`Shell`].

use std::sync::Arc;

use leptos::prelude::*;
use takaful::{
    catalog::Catalog,
    checkout::checkout,
    pricing::format_price,
    products::CategoryFilter,
    store::{CartEvent, CartStore},
};

use crate::dialog::{Dialog, DialogAction};

/// Screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Landing page
    #[default]
    Home,
    /// Product grid
    Shop,
    /// Cart, opened from the header
    Cart,
    /// Brand story
    About,
    /// Contact form
    Contact,
}

impl Screen {
    /// Screens reachable from the tab bar, in order.
    pub const TABS: [Screen; 4] = [Screen::Home, Screen::Shop, Screen::About, Screen::Contact];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Shop => "Shop",
            Screen::Cart => "Cart",
            Screen::About => "About",
            Screen::Contact => "Contact",
        }
    }

    /// Tab icon name.
    pub fn icon(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Shop => "bag",
            Screen::Cart => "cart",
            Screen::About => "info",
            Screen::Contact => "mail",
        }
    }
}

/// Signals shared across screens.
#[derive(Debug, Clone, Copy)]
pub struct Shell {
    /// Session cart
    pub store: RwSignal<CartStore>,

    /// Visible screen
    pub screen: RwSignal<Screen>,

    /// Screen to return to when the cart is closed
    pub previous: RwSignal<Screen>,

    /// Category chip selected on the shop screen
    pub shop_category: RwSignal<CategoryFilter>,

    /// Modal slot
    pub dialog: RwSignal<Option<Dialog>>,

    /// Polite live region text; the counter forces repeated messages to be re-read
    pub live_message: RwSignal<(u64, String)>,
}

impl Shell {
    /// Create the shell with an empty cart on the home screen.
    ///
    /// Every cart change is announced through the live region by a store subscriber.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let live_message = RwSignal::new((0, String::new()));
        let mut store = CartStore::new(Arc::clone(&catalog));

        store.subscribe(move |event, _cart| {
            announce(live_message, cart_event_message(&catalog, event));
        });

        Self {
            store: RwSignal::new(store),
            screen: RwSignal::new(Screen::default()),
            previous: RwSignal::new(Screen::default()),
            shop_category: RwSignal::new(CategoryFilter::All),
            dialog: RwSignal::new(None),
            live_message,
        }
    }

    /// Catalog behind the store.
    pub fn catalog(self) -> Arc<Catalog> {
        self.store.with_untracked(|store| Arc::clone(store.catalog()))
    }

    /// Show a screen.
    pub fn navigate(self, screen: Screen) {
        self.screen.set(screen);
    }

    /// Show the shop filtered to a category.
    pub fn open_shop(self, category: CategoryFilter) {
        self.shop_category.set(category);
        self.navigate(Screen::Shop);
    }

    /// Open the cart, remembering where it was opened from.
    pub fn open_cart(self) {
        let current = self.screen.get_untracked();

        if current != Screen::Cart {
            self.previous.set(current);
        }

        self.screen.set(Screen::Cart);
    }

    /// Return from the cart.
    pub fn close_cart(self) {
        self.screen.set(self.previous.get_untracked());
    }

    /// Fill the modal slot.
    pub fn show(self, dialog: Dialog) {
        self.dialog.set(Some(dialog));
    }

    /// Empty the modal slot.
    pub fn dismiss(self) {
        self.dialog.set(None);
    }

    /// Units in the cart, tracked.
    pub fn cart_item_count(self) -> u64 {
        self.store.with(CartStore::cart_item_count)
    }

    /// Add one unit and confirm it.
    pub fn add_to_cart(self, product_id: &str) {
        match self.store.try_update(|store| store.add_to_cart(product_id)) {
            Some(Ok(_)) => self.show(Dialog::added_to_cart()),
            Some(Err(error)) => self.show(Dialog::cart_error(&error)),
            None => {}
        }
    }

    /// Set a line's quantity; zero or less removes it.
    pub fn update_quantity(self, product_id: &str, quantity: i64) {
        self.store
            .update(|store| store.update_quantity(product_id, quantity));
    }

    /// Remove a line.
    pub fn remove_from_cart(self, product_id: &str) {
        self.store.update(|store| store.remove_from_cart(product_id));
    }

    /// Ask before placing the order.
    pub fn request_checkout(self) {
        let total = self
            .store
            .with_untracked(CartStore::cart_total)
            .map(|total| format_price(&total));

        match total {
            Ok(total) => self.show(Dialog::confirm_checkout(&total)),
            Err(error) => self.show(Dialog::cart_error(&error)),
        }
    }

    /// Run a dialog action.
    pub fn dispatch(self, action: DialogAction) {
        match action {
            DialogAction::Dismiss => self.dismiss(),
            DialogAction::AddToCart(product_id) => self.add_to_cart(&product_id),
            DialogAction::ClearCart => {
                self.store.update(CartStore::clear_cart);
                self.dismiss();
            }
            DialogAction::Checkout => match self.store.try_update(checkout) {
                Some(Ok(confirmation)) => {
                    announce(self.live_message, confirmation.message());
                    self.show(Dialog::order_placed(&confirmation));
                }
                Some(Err(error)) => self.show(Dialog::info("Error", error.to_string())),
                None => self.dismiss(),
            },
            DialogAction::Navigate(screen) => {
                self.dismiss();
                self.navigate(screen);
            }
        }
    }
}

/// Live region text for a cart change.
pub fn cart_event_message(catalog: &Catalog, event: &CartEvent) -> String {
    let name = |product_id: &str| {
        catalog
            .get(product_id)
            .map_or_else(|| product_id.to_string(), |product| product.name.clone())
    };

    match event {
        CartEvent::Added { product_id, .. } => format!("Added {} to cart.", name(product_id)),
        CartEvent::QuantityChanged {
            product_id,
            quantity,
        } => format!("{} quantity is now {quantity}.", name(product_id)),
        CartEvent::Removed { product_id } => format!("Removed {} from cart.", name(product_id)),
        CartEvent::Cleared => "Cart cleared.".to_string(),
    }
}

/// Push a message to the polite live region.
pub fn announce(live_message: RwSignal<(u64, String)>, message: String) {
    live_message.update(|(id, text)| {
        *id = id.saturating_add(1);
        *text = message;
    });
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use takaful::fixtures::builtin_catalog;

    use super::*;

    fn shell() -> TestResult<Shell> {
        Ok(Shell::new(Arc::new(builtin_catalog()?)))
    }

    #[test]
    fn add_to_cart_updates_badge_and_announces() -> TestResult {
        let shell = shell()?;

        shell.add_to_cart("w1");
        shell.add_to_cart("w1");

        assert_eq!(shell.store.with_untracked(CartStore::cart_item_count), 2);
        assert_eq!(shell.dialog.get_untracked(), Some(Dialog::added_to_cart()));

        let (id, message) = shell.live_message.get_untracked();

        assert_eq!(id, 2);
        assert!(message.starts_with("Added "));

        Ok(())
    }

    #[test]
    fn unknown_product_shows_error() -> TestResult {
        let shell = shell()?;

        shell.add_to_cart("nope");

        assert_eq!(
            shell.dialog.get_untracked().map(|dialog| dialog.message),
            Some("Product not found: nope".to_string())
        );
        assert_eq!(shell.store.with_untracked(CartStore::cart_item_count), 0);

        Ok(())
    }

    #[test]
    fn checkout_flow_empties_cart_and_returns_home() -> TestResult {
        let shell = shell()?;

        shell.navigate(Screen::Shop);
        shell.add_to_cart("w1");
        shell.add_to_cart("w1");
        shell.add_to_cart("wl1");
        shell.open_cart();
        shell.request_checkout();

        assert_eq!(
            shell.dialog.get_untracked().map(|dialog| dialog.message),
            Some("Place your order of Rs. 26,800?".to_string())
        );

        shell.dispatch(DialogAction::Checkout);

        let placed = shell.dialog.get_untracked().ok_or("no dialog")?;

        assert_eq!(placed.title, "Order Placed!");
        assert_eq!(
            placed.message,
            "Your order of Rs. 26,800 has been placed successfully!"
        );
        assert!(shell.store.with_untracked(CartStore::is_empty));

        shell.dispatch(DialogAction::Navigate(Screen::Home));

        assert_eq!(shell.screen.get_untracked(), Screen::Home);
        assert_eq!(shell.dialog.get_untracked(), None);

        Ok(())
    }

    #[test]
    fn clear_cart_action_empties_cart() -> TestResult {
        let shell = shell()?;

        shell.add_to_cart("b1");
        shell.show(Dialog::confirm_clear());
        shell.dispatch(DialogAction::ClearCart);

        assert!(shell.store.with_untracked(CartStore::is_empty));
        assert_eq!(shell.dialog.get_untracked(), None);

        Ok(())
    }

    #[test]
    fn cart_returns_to_previous_screen() -> TestResult {
        let shell = shell()?;

        shell.navigate(Screen::Shop);
        shell.open_cart();

        assert_eq!(shell.screen.get_untracked(), Screen::Cart);

        shell.close_cart();

        assert_eq!(shell.screen.get_untracked(), Screen::Shop);

        Ok(())
    }

    #[test]
    fn collections_open_filtered_shop() -> TestResult {
        let shell = shell()?;

        shell.open_shop("belts".parse()?);

        assert_eq!(shell.screen.get_untracked(), Screen::Shop);
        assert_eq!(
            shell.shop_category.get_untracked().as_str(),
            "belts"
        );

        Ok(())
    }

    #[test]
    fn quantity_to_zero_removes_line() -> TestResult {
        let shell = shell()?;

        shell.add_to_cart("wl2");
        shell.update_quantity("wl2", 0);

        assert!(shell.store.with_untracked(CartStore::is_empty));

        Ok(())
    }

    #[test]
    fn removing_absent_line_is_silent() -> TestResult {
        let shell = shell()?;

        shell.remove_from_cart("w1");
        shell.update_quantity("w1", 0);

        assert_eq!(shell.live_message.get_untracked(), (0, String::new()));

        Ok(())
    }

    #[test]
    fn stepping_down_to_zero_announces_removal() -> TestResult {
        let shell = shell()?;
        let name = shell
            .catalog()
            .get("b1")
            .map(|product| product.name.clone())
            .ok_or("b1 missing")?;

        shell.add_to_cart("b1");
        shell.update_quantity("b1", 2);

        assert_eq!(
            shell.live_message.get_untracked().1,
            format!("{name} quantity is now 2.")
        );

        shell.update_quantity("b1", 1);
        shell.update_quantity("b1", 0);

        assert_eq!(
            shell.live_message.get_untracked(),
            (4, format!("Removed {name} from cart."))
        );

        Ok(())
    }

    #[test]
    fn tabs_exclude_cart() {
        assert!(!Screen::TABS.contains(&Screen::Cart));
        assert_eq!(Screen::TABS.map(Screen::label), ["Home", "Shop", "About", "Contact"]);
    }
}
