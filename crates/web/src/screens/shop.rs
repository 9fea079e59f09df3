//! Shop screen

use std::sync::Arc;

use leptos::prelude::*;
use takaful::{
    catalog::Catalog,
    content::{CategoryChip, StorefrontContent},
    products::{CategoryFilter, Product},
};

use crate::{
    components::{header::ScreenHeader, icon::Icon, product_card::ProductCard},
    state::Shell,
};

/// Count line above the grid.
pub fn product_count_text(count: usize) -> String {
    if count == 1 {
        "1 Product".to_string()
    } else {
        format!("{count} Products")
    }
}

/// Products shown for the selected chip, in catalog order.
pub fn visible_products(catalog: &Catalog, filter: CategoryFilter) -> Vec<Product> {
    catalog.products_in(filter).into_iter().cloned().collect()
}

#[component]
fn CategoryChips(chips: Vec<CategoryChip>, selected: RwSignal<CategoryFilter>) -> impl IntoView {
    let chips = chips
        .into_iter()
        .map(|chip| {
            let id = chip.id;

            view! {
                <button
                    type="button"
                    role="radio"
                    class=move || if selected.get() == id { "chip chip-selected" } else { "chip" }
                    aria-checked=move || (selected.get() == id).to_string()
                    on:click=move |_| selected.set(id)
                >
                    <Icon name=chip.icon />
                    <span class="chip-label">{chip.name}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="chip-row" role="radiogroup" aria-label="Categories">
            {chips}
        </div>
    }
}

/// Product grid filtered by category.
#[component]
pub fn ShopScreen(shell: Shell, content: Arc<StorefrontContent>) -> impl IntoView {
    let catalog = shell.catalog();
    let products = Memo::new(move |_| visible_products(&catalog, shell.shop_category.get()));

    view! {
        <div class="screen shop-screen">
            <ScreenHeader title="Shop" shell=shell />
            <CategoryChips chips=content.categories.clone() selected=shell.shop_category />
            <p class="product-count" aria-live="polite">
                {move || products.with(|products| product_count_text(products.len()))}
            </p>
            {move || {
                let products = products.get();

                if products.is_empty() {
                    view! {
                        <div class="empty-state">
                            <p class="empty-title">"No products found"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="product-grid">
                            {products
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product shell=shell /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use takaful::fixtures::builtin_catalog;

    use super::*;

    #[test]
    fn count_text_pluralises() {
        assert_eq!(product_count_text(1), "1 Product");
        assert_eq!(product_count_text(11), "11 Products");
        assert_eq!(product_count_text(0), "0 Products");
    }

    #[test]
    fn wallets_chip_shows_wallets_only() -> TestResult {
        let catalog = builtin_catalog()?;
        let ids: Vec<String> = visible_products(&catalog, "wallets".parse()?)
            .into_iter()
            .map(|product| product.id)
            .collect();

        assert_eq!(ids, ["wl1", "wl2", "wl3", "wl4"]);

        Ok(())
    }

    #[test]
    fn all_chip_shows_whole_catalog() -> TestResult {
        let catalog = builtin_catalog()?;

        assert_eq!(visible_products(&catalog, CategoryFilter::All).len(), catalog.len());

        Ok(())
    }
}
