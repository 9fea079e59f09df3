//! Content cards

use leptos::prelude::*;
use takaful::content::{BrandPromise, Collection, Feature};

use crate::components::icon::Icon;

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <header class="section-header">
            <h2 class="section-title">{title}</h2>
            {subtitle.map(|text| view! { <p class="section-subtitle">{text}</p> })}
        </header>
    }
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <Icon name=feature.icon />
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </div>
    }
}

#[component]
pub fn PromiseCard(promise: BrandPromise) -> impl IntoView {
    view! {
        <div class="promise-card">
            <Icon name=promise.icon />
            <h3 class="promise-title">{promise.title}</h3>
            <p class="promise-description">{promise.description}</p>
            {promise.stat.map(|stat| view! { <p class="promise-stat">{stat}</p> })}
        </div>
    }
}

/// Collection banner; pressing it runs `on_open`.
#[component]
pub fn CollectionCard(
    collection: Collection,
    #[prop(into)] on_open: Callback<()>,
) -> impl IntoView {
    let count = collection.product_count_label();
    let label = format!("{}, {count}", collection.title);

    view! {
        <button
            type="button"
            class="collection-card"
            aria-label=label
            on:click=move |_| on_open.run(())
        >
            <img src=collection.image alt="" loading="lazy" />
            <div class="collection-overlay">
                <span class="collection-count">{count}</span>
                <h3 class="collection-title">{collection.title}</h3>
                <p class="collection-description">{collection.description}</p>
                <span class="collection-link">"Explore"</span>
            </div>
        </button>
    }
}
