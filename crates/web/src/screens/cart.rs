//! Cart screen

use leptos::prelude::*;
use takaful::{
    discounts::discount_badge,
    pricing::{format_minor, format_price},
    products::{CategoryFilter, Product},
    receipt::Receipt,
    store::CartStore,
};

use crate::{
    components::button::{Button, ButtonSize, ButtonVariant},
    dialog::Dialog,
    state::Shell,
};

/// A cart line joined with its product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    /// Product on the line
    pub product: Product,
    /// Units
    pub quantity: u32,
}

/// Rows for the store's lines, in insertion order.
pub fn cart_rows(store: &CartStore) -> Vec<CartRow> {
    let catalog = store.catalog();

    store
        .lines()
        .iter()
        .filter_map(|line| {
            catalog.get(line.product_id()).map(|product| CartRow {
                product: product.clone(),
                quantity: line.quantity(),
            })
        })
        .collect()
}

/// Formatted totals shown under the lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Units in the cart
    pub item_count: u64,
    /// Sum at current prices
    pub subtotal: String,
    /// Markdown savings; `None` when nothing is discounted
    pub savings: Option<String>,
    /// Amount charged
    pub total: String,
}

/// Summary for the store's cart, or `None` when a total can't be computed.
pub fn cart_summary(store: &CartStore) -> Option<CartSummary> {
    let receipt = Receipt::from_store(store).ok()?;
    let total = format_price(receipt.total());
    let saved = receipt.savings_minor();

    let savings = (saved > 0).then(|| format_minor(saved, receipt.currency()));

    Some(CartSummary {
        item_count: store.cart_item_count(),
        subtotal: total.clone(),
        savings,
        total,
    })
}

#[component]
fn CartLineItem(row: CartRow, shell: Shell) -> impl IntoView {
    let CartRow { product, quantity } = row;
    let quantity = i64::from(quantity);
    let id = product.id.clone();
    let (dec_id, inc_id, remove_id) = (id.clone(), id.clone(), id);

    let discount = product.discount_percent().map(|points| {
        view! { <span class="badge badge-discount">{discount_badge(points)}</span> }
    });

    view! {
        <li class="cart-item">
            <img class="cart-item-image" src=product.image.clone() alt="" />
            <div class="cart-item-info">
                <h3 class="cart-item-name">{product.name.clone()}</h3>
                <div class="cart-item-price-row">
                    <span class="cart-item-price">{format_price(&product.price)}</span>
                    {discount}
                </div>
                <div class="quantity-stepper">
                    <button
                        type="button"
                        class="quantity-button"
                        aria-label="Decrease quantity"
                        on:click=move |_| shell.update_quantity(&dec_id, quantity - 1)
                    >
                        "−"
                    </button>
                    <span class="quantity-value" aria-label=format!("Quantity {quantity}")>
                        {quantity}
                    </span>
                    <button
                        type="button"
                        class="quantity-button"
                        aria-label="Increase quantity"
                        on:click=move |_| shell.update_quantity(&inc_id, quantity + 1)
                    >
                        "+"
                    </button>
                </div>
            </div>
            <button
                type="button"
                class="icon-button icon-button-danger"
                aria-label="Remove from cart"
                on:click=move |_| shell.remove_from_cart(&remove_id)
            >
                <span aria-hidden="true">"🗑"</span>
            </button>
        </li>
    }
}

#[component]
fn EmptyCart(shell: Shell) -> impl IntoView {
    view! {
        <div class="empty-state">
            <span class="empty-icon" aria-hidden="true">"👜"</span>
            <h2 class="empty-title">"Your Cart is Empty"</h2>
            <p class="empty-subtitle">
                "Looks like you haven't added any items to your cart yet."
            </p>
            <Button
                title="Start Shopping"
                size=ButtonSize::Lg
                on_press=move |()| shell.open_shop(CategoryFilter::All)
            />
        </div>
    }
}

/// Lines, quantity steppers, totals and checkout.
#[component]
pub fn CartScreen(shell: Shell) -> impl IntoView {
    let rows = Memo::new(move |_| shell.store.with(cart_rows));
    let summary = Memo::new(move |_| shell.store.with(cart_summary));

    view! {
        <div class="screen cart-screen">
            <header class="screen-header">
                <button
                    type="button"
                    class="icon-button"
                    aria-label="Go back"
                    on:click=move |_| shell.close_cart()
                >
                    <span aria-hidden="true">"←"</span>
                </button>
                <h1 class="screen-title">"My Cart"</h1>
                {move || {
                    rows.with(|rows| !rows.is_empty())
                        .then(|| {
                            view! {
                                <Button
                                    title="Clear"
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    aria_label="Clear cart"
                                    on_press=move |()| shell.show(Dialog::confirm_clear())
                                />
                            }
                        })
                }}
            </header>
            {move || {
                let rows = rows.get();

                if rows.is_empty() {
                    return view! { <EmptyCart shell=shell /> }.into_any();
                }

                let items = rows
                    .into_iter()
                    .map(|row| view! { <CartLineItem row=row shell=shell /> })
                    .collect_view();

                view! {
                    <ul class="cart-list">{items}</ul>
                    {move || {
                        summary.get().map(|summary| {
                            let savings = summary.savings.map(|saved| {
                                view! {
                                    <div class="summary-row summary-savings">
                                        <span>"You save"</span>
                                        <span>{saved}</span>
                                    </div>
                                }
                            });

                            view! {
                                <section class="cart-summary" aria-label="Order summary">
                                    <div class="summary-row">
                                        <span>{format!("Items ({})", summary.item_count)}</span>
                                        <span>{summary.subtotal}</span>
                                    </div>
                                    {savings}
                                    <div class="summary-row">
                                        <span>"Delivery"</span>
                                        <span class="summary-free">"FREE"</span>
                                    </div>
                                    <div class="summary-row summary-total">
                                        <span>"Total"</span>
                                        <span>{summary.total}</span>
                                    </div>
                                </section>
                            }
                        })
                    }}
                    <Button
                        title="Proceed to Checkout"
                        size=ButtonSize::Lg
                        full_width=true
                        on_press=move |()| shell.request_checkout()
                    />
                }
                .into_any()
            }}
        </div>
    }
}
