//! Screen header and tab bar

use leptos::prelude::*;

use crate::{
    components::icon::glyph,
    state::{Screen, Shell},
};

/// Badge text for a cart count; hidden at zero.
pub fn badge_text(count: u64) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

/// Cart button with the item-count badge.
#[component]
pub fn CartButton(shell: Shell) -> impl IntoView {
    view! {
        <button
            type="button"
            class="cart-button"
            aria-label=move || format!("Cart, {} items", shell.cart_item_count())
            on:click=move |_| shell.open_cart()
        >
            <span aria-hidden="true">"👜"</span>
            {move || {
                badge_text(shell.cart_item_count())
                    .map(|count| view! { <span class="cart-badge">{count}</span> })
            }}
        </button>
    }
}

/// Screen title with the cart button on the right.
#[component]
pub fn ScreenHeader(#[prop(into)] title: String, shell: Shell) -> impl IntoView {
    view! {
        <header class="screen-header">
            <h1 class="screen-title">{title}</h1>
            <CartButton shell=shell />
        </header>
    }
}

/// Bottom navigation.
#[component]
pub fn TabBar(shell: Shell) -> impl IntoView {
    let tabs = Screen::TABS
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    type="button"
                    role="tab"
                    class=move || {
                        if shell.screen.get() == tab { "tab tab-selected" } else { "tab" }
                    }
                    aria-selected=move || (shell.screen.get() == tab).to_string()
                    on:click=move |_| shell.navigate(tab)
                >
                    <span class="tab-icon" aria-hidden="true">
                        {glyph(tab.icon())}
                    </span>
                    <span class="tab-label">{tab.label()}</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="tab-bar" role="tablist">
            {tabs}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_hidden_at_zero() {
        assert_eq!(badge_text(0), None);
        assert_eq!(badge_text(3), Some("3".to_string()));
    }
}
