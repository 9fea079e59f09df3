//! Takaful Market storefront app

use std::sync::Arc;

use leptos::{logging, prelude::*};
use takaful::{
    catalog::Catalog,
    content::StorefrontContent,
    fixtures::{FixtureError, builtin_catalog, builtin_content},
};

mod components;
mod dialog;
mod screens;
mod state;

use components::header::TabBar;
use dialog::DialogModal;
use screens::{
    about::AboutScreen, cart::CartScreen, contact::ContactScreen, home::HomeScreen,
    shop::ShopScreen,
};
use state::{Screen, Shell};

/// Parsed fixtures shared by every screen.
#[derive(Debug)]
struct AppData {
    /// Product catalog
    catalog: Arc<Catalog>,

    /// Marketing copy
    content: Arc<StorefrontContent>,
}

impl AppData {
    fn load() -> Result<Self, FixtureError> {
        Ok(Self {
            catalog: Arc::new(builtin_catalog()?),
            content: Arc::new(builtin_content()?),
        })
    }
}

/// App shell: the visible screen, the tab bar and the modal slot.
#[component]
fn App() -> impl IntoView {
    match AppData::load() {
        Ok(app_data) => {
            let shell = Shell::new(Arc::clone(&app_data.catalog));
            let content = app_data.content;

            view! {
                <div class="app">
                    <p class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                        {move || shell.live_message.get().1}
                    </p>
                    <main class="app-main">
                        {move || {
                            let content = Arc::clone(&content);

                            match shell.screen.get() {
                                Screen::Home => {
                                    view! { <HomeScreen shell=shell content=content /> }.into_any()
                                }
                                Screen::Shop => {
                                    view! { <ShopScreen shell=shell content=content /> }.into_any()
                                }
                                Screen::Cart => view! { <CartScreen shell=shell /> }.into_any(),
                                Screen::About => {
                                    view! { <AboutScreen shell=shell content=content /> }.into_any()
                                }
                                Screen::Contact => {
                                    view! { <ContactScreen shell=shell content=content /> }
                                        .into_any()
                                }
                            }
                        }}
                    </main>
                    {move || {
                        (shell.screen.get() != Screen::Cart)
                            .then(|| view! { <TabBar shell=shell /> })
                    }}
                    <DialogModal shell=shell />
                </div>
            }
            .into_any()
        }
        Err(error) => {
            logging::error!("failed to load storefront data: {error}");

            view! {
                <main class="app-main">
                    <div class="load-error" role="alert">
                        <h1>"Takaful Market"</h1>
                        <p>{error.to_string()}</p>
                    </div>
                </main>
            }
            .into_any()
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn builtin_data_loads() -> TestResult {
        let app_data = AppData::load()?;

        assert_eq!(app_data.catalog.len(), 11);
        assert!(!app_data.content.collections.is_empty());

        Ok(())
    }
}
