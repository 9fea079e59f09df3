//! Product card

use leptos::prelude::*;
use takaful::{discounts::discount_badge, pricing::format_price, products::Product};

use crate::{dialog::Dialog, state::Shell};

const STAR_COUNT: usize = 5;

/// Five-star rating row.
#[component]
pub fn Stars(
    /// Filled stars, 0 to 5
    filled: usize,
    /// Rating text shown after the stars
    #[prop(optional, into)]
    caption: Option<String>,
) -> impl IntoView {
    let stars = (0..STAR_COUNT)
        .map(|index| {
            let class = if index < filled { "star star-filled" } else { "star" };

            view! { <span class=class aria-hidden="true">"★"</span> }
        })
        .collect_view();

    view! {
        <div class="stars" role="img" aria-label=format!("{filled} out of {STAR_COUNT} stars")>
            {stars}
            {caption.map(|text| view! { <span class="stars-caption">{text}</span> })}
        </div>
    }
}

/// Accessible name for a product card.
pub fn card_label(product: &Product) -> String {
    format!("{}, Price: {}", product.name, format_price(&product.price))
}

/// Struck-through price shown next to the current one, if the product is marked down.
pub fn struck_price(product: &Product) -> Option<String> {
    product.was_price().map(format_price)
}

/// Card with image, badges, rating, price and an add button.
#[component]
pub fn ProductCard(
    /// Product shown on the card
    product: Product,
    /// App shell
    shell: Shell,
) -> impl IntoView {
    let label = card_label(&product);
    let details = Dialog::product_details(&product);
    let add_id = product.id.clone();
    let add_label = format!("Add {} to cart", product.name);

    let discount = product.discount_percent().map(|points| {
        view! { <span class="badge badge-discount">{discount_badge(points)}</span> }
    });

    let new_badge = product
        .is_new
        .then(|| view! { <span class="badge badge-new">"NEW"</span> });

    let original_price = struck_price(&product).map(|original| {
        view! {
            <span class="product-card-original">
                <span class="sr-only">"Was "</span>
                <del>{original}</del>
            </span>
        }
    });

    view! {
        <article class="product-card">
            <button
                type="button"
                class="product-card-body"
                aria-label=label
                on:click=move |_| shell.show(details.clone())
            >
                <div class="product-card-image">
                    <img src=product.image.clone() alt="" loading="lazy" />
                    {new_badge}
                    {discount}
                </div>
                <h3 class="product-card-name">{product.name.clone()}</h3>
                <Stars
                    filled=product.filled_stars()
                    caption=format!("({:.1})", product.rating)
                />
            </button>
            <div class="product-card-footer">
                <div class="product-card-prices">
                    <span class="product-card-price">{format_price(&product.price)}</span>
                    {original_price}
                </div>
                <button
                    type="button"
                    class="icon-button icon-button-primary"
                    aria-label=add_label
                    on:click=move |_| shell.add_to_cart(&add_id)
                >
                    <span aria-hidden="true">"+"</span>
                </button>
            </div>
        </article>
    }
}

/// Horizontal rail of product cards.
#[component]
pub fn ProductRail(
    /// Products in display order
    products: Vec<Product>,
    /// App shell
    shell: Shell,
) -> impl IntoView {
    view! {
        <div class="product-rail">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product shell=shell /> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use takaful::fixtures::builtin_catalog;

    use super::*;

    #[test]
    fn card_label_names_price() -> TestResult {
        let catalog = builtin_catalog()?;
        let product = catalog.get("wl1").ok_or("wl1 missing")?;

        assert_eq!(card_label(product), format!("{}, Price: Rs. 1,800", product.name));

        Ok(())
    }

    #[test]
    fn struck_price_only_for_markdowns() -> TestResult {
        let catalog = builtin_catalog()?;
        let watch = catalog.get("w1").ok_or("w1 missing")?;

        assert_eq!(struck_price(watch), Some("Rs. 18,000".to_string()));

        let mut belt = catalog.get("b2").cloned().ok_or("b2 missing")?;
        belt.original_price = catalog.get("b3").map(|cheaper| cheaper.price);

        assert_eq!(struck_price(&belt), None);
        assert_eq!(belt.discount_percent(), None);

        Ok(())
    }
}
