//! Modal dialog

use leptos::prelude::*;
use takaful::{
    checkout::OrderConfirmation,
    contact::{ContactAction, ContactForm, ContactFormError, ContactSubmission},
    pricing::format_price,
    products::Product,
    store::CartError,
};

use crate::{
    components::button::{Button, ButtonVariant},
    state::{Screen, Shell},
};

/// What pressing a dialog button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Close the dialog.
    Dismiss,

    /// Add one unit of the product.
    AddToCart(String),

    /// Empty the cart.
    ClearCart,

    /// Place the order.
    Checkout,

    /// Close the dialog and show a screen.
    Navigate(Screen),
}

/// Dialog button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    /// Label
    pub label: &'static str,

    /// Action dispatched on press
    pub action: DialogAction,

    /// Button style
    pub variant: ButtonVariant,

    /// Shown greyed out and ignores presses
    pub disabled: bool,
}

impl DialogButton {
    fn cancel() -> Self {
        Self {
            label: "Cancel",
            action: DialogAction::Dismiss,
            variant: ButtonVariant::Ghost,
            disabled: false,
        }
    }

    fn ok() -> Self {
        Self {
            label: "OK",
            action: DialogAction::Dismiss,
            variant: ButtonVariant::Primary,
            disabled: false,
        }
    }
}

/// Contents of the modal slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    /// Title
    pub title: String,

    /// Body text; newlines are preserved
    pub message: String,

    /// Buttons, left to right
    pub buttons: Vec<DialogButton>,
}

impl Dialog {
    /// Informational dialog with a single OK button.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            buttons: vec![DialogButton::ok()],
        }
    }

    /// Product details with an "Add to Cart" button, greyed out when the product is out of
    /// stock.
    pub fn product_details(product: &Product) -> Self {
        let features: Vec<String> = product
            .features
            .iter()
            .map(|feature| format!("• {feature}"))
            .collect();

        Self {
            title: product.name.clone(),
            message: format!(
                "Price: {}\n\n{}\n\nFeatures:\n{}",
                format_price(&product.price),
                product.description,
                features.join("\n")
            ),
            buttons: vec![
                DialogButton::cancel(),
                DialogButton {
                    label: "Add to Cart",
                    action: DialogAction::AddToCart(product.id.clone()),
                    variant: ButtonVariant::Primary,
                    disabled: !product.in_stock,
                },
            ],
        }
    }

    /// Shown after a product is added.
    pub fn added_to_cart() -> Self {
        Self::info("Success", "Product added to cart!")
    }

    /// Shown when an add is rejected.
    pub fn cart_error(error: &CartError) -> Self {
        Self::info("Error", error.to_string())
    }

    /// Asks before emptying the cart.
    pub fn confirm_clear() -> Self {
        Self {
            title: "Clear Cart".to_string(),
            message: "Are you sure you want to clear all items?".to_string(),
            buttons: vec![
                DialogButton::cancel(),
                DialogButton {
                    label: "Clear",
                    action: DialogAction::ClearCart,
                    variant: ButtonVariant::Secondary,
                    disabled: false,
                },
            ],
        }
    }

    /// Asks before placing the order for `total`.
    pub fn confirm_checkout(total: &str) -> Self {
        Self {
            title: "Checkout".to_string(),
            message: format!("Place your order of {total}?"),
            buttons: vec![
                DialogButton::cancel(),
                DialogButton {
                    label: "Place Order",
                    action: DialogAction::Checkout,
                    variant: ButtonVariant::Primary,
                    disabled: false,
                },
            ],
        }
    }

    /// Shown once the order is placed; OK returns to the home screen.
    pub fn order_placed(confirmation: &OrderConfirmation) -> Self {
        Self {
            title: OrderConfirmation::TITLE.to_string(),
            message: confirmation.message(),
            buttons: vec![DialogButton {
                label: "OK",
                action: DialogAction::Navigate(Screen::Home),
                variant: ButtonVariant::Primary,
                disabled: false,
            }],
        }
    }

    /// Blocking validation error.
    pub fn contact_error(error: &ContactFormError) -> Self {
        Self::info(ContactForm::ERROR_TITLE, error.to_string())
    }

    /// Contact form acknowledgement.
    pub fn message_sent() -> Self {
        Self::info(ContactSubmission::TITLE, ContactSubmission::MESSAGE)
    }

    /// Prompt for an actionable contact detail.
    pub fn contact_action(action: &ContactAction) -> Self {
        Self::info(action.title(), action.prompt())
    }
}

/// Modal overlay showing the current dialog, if any.
#[component]
pub fn DialogModal(shell: Shell) -> impl IntoView {
    view! {
        {move || {
            shell.dialog.get().map(|dialog| {
                let buttons = dialog
                    .buttons
                    .into_iter()
                    .map(|button| {
                        let action = button.action;

                        view! {
                            <Button
                                title=button.label
                                variant=button.variant
                                disabled=button.disabled
                                on_press=move |()| shell.dispatch(action.clone())
                            />
                        }
                    })
                    .collect_view();

                view! {
                    <div class="dialog-backdrop">
                        <div
                            class="dialog"
                            role="alertdialog"
                            aria-modal="true"
                            aria-labelledby="dialog-title"
                        >
                            <h2 id="dialog-title" class="dialog-title">{dialog.title}</h2>
                            <p class="dialog-message">{dialog.message}</p>
                            <div class="dialog-actions">{buttons}</div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
