//! Button

use leptos::prelude::*;

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Gold fill, dark text
    #[default]
    Primary,
    /// Dark fill, white text
    Secondary,
    /// Gold outline
    Outline,
    /// Text only
    Ghost,
}

/// Button size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// Small
    Sm,
    /// Medium
    #[default]
    Md,
    /// Large
    Lg,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

/// CSS classes for a button.
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    inactive: bool,
    full_width: bool,
) -> String {
    let mut classes = format!("btn {} {}", variant.class(), size.class());

    if inactive {
        classes.push_str(" btn-disabled");
    }

    if full_width {
        classes.push_str(" btn-full");
    }

    classes
}

/// Brand button. Disabled and loading buttons ignore presses.
#[component]
pub fn Button(
    /// Label
    #[prop(into)]
    title: String,
    /// Press handler
    #[prop(into)]
    on_press: Callback<()>,
    /// Visual style
    #[prop(optional)]
    variant: ButtonVariant,
    /// Size
    #[prop(optional)]
    size: ButtonSize,
    /// Greyed out and inert
    #[prop(optional)]
    disabled: bool,
    /// Shows a spinner and is inert while true
    #[prop(optional, into)]
    loading: Signal<bool>,
    /// Stretch to the container width
    #[prop(optional)]
    full_width: bool,
    /// Accessible name when it differs from the label
    #[prop(optional, into)]
    aria_label: Option<String>,
) -> impl IntoView {
    let inactive = move || disabled || loading.get();
    let aria_label = aria_label.unwrap_or_else(|| title.clone());

    view! {
        <button
            type="button"
            class=move || button_class(variant, size, inactive(), full_width)
            aria-label=aria_label
            aria-disabled=move || inactive().to_string()
            aria-busy=move || loading.get().to_string()
            on:click=move |_| {
                if !inactive() {
                    on_press.run(());
                }
            }
        >
            {move || {
                if loading.get() {
                    view! { <span class="btn-spinner" aria-hidden="true"></span> }.into_any()
                } else {
                    view! { <span class="btn-text">{title.clone()}</span> }.into_any()
                }
            }}
        </button>
    }
}
