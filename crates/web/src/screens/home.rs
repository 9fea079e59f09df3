//! Home screen

use std::sync::Arc;

use leptos::prelude::*;
use takaful::{content::StorefrontContent, products::CategoryFilter};

use crate::{
    components::{
        button::{Button, ButtonSize, ButtonVariant},
        cards::{CollectionCard, FeatureCard, PromiseCard, SectionHeader},
        header::CartButton,
        product_card::ProductRail,
    },
    state::Shell,
};

/// Landing page: hero, collections, product rails, brand story and footer.
#[component]
pub fn HomeScreen(shell: Shell, content: Arc<StorefrontContent>) -> impl IntoView {
    let catalog = shell.catalog();
    let bestsellers = catalog.bestsellers().into_iter().cloned().collect::<Vec<_>>();
    let new_arrivals = catalog.new_arrivals().into_iter().cloned().collect::<Vec<_>>();
    let brand = content.brand.clone();

    let features = content
        .features
        .iter()
        .cloned()
        .map(|feature| view! { <FeatureCard feature=feature /> })
        .collect_view();

    let collections = content
        .collections
        .iter()
        .cloned()
        .map(|collection| {
            let category = collection.category;

            view! {
                <CollectionCard
                    collection=collection
                    on_open=move |()| shell.open_shop(category)
                />
            }
        })
        .collect_view();

    let promises = content
        .brand_promises
        .iter()
        .cloned()
        .map(|promise| view! { <PromiseCard promise=promise /> })
        .collect_view();

    let story = brand
        .story
        .iter()
        .map(|paragraph| view! { <p class="about-text">{paragraph.clone()}</p> })
        .collect_view();

    view! {
        <div class="screen home-screen">
            <header class="home-header">
                <div class="brand">
                    <span class="brand-logo" aria-hidden="true">{brand.short_name.clone()}</span>
                    <span class="brand-name">{brand.name.clone()}</span>
                </div>
                <CartButton shell=shell />
            </header>

            <section class="hero" aria-labelledby="hero-title">
                <span class="badge badge-sale">{brand.hero_badge.clone()}</span>
                <h1 id="hero-title" class="hero-title">{brand.hero_title.clone()}</h1>
                <p class="hero-subtitle">{brand.hero_subtitle.clone()}</p>
                <Button
                    title="Shop Now"
                    size=ButtonSize::Lg
                    on_press=move |()| shell.open_shop(CategoryFilter::All)
                />
            </section>

            <section class="features" aria-label="Why shop with us">
                {features}
            </section>

            <section class="section">
                <SectionHeader title="Exclusive Collections" subtitle="Handpicked luxury for you" />
                <div class="collection-list">{collections}</div>
            </section>

            <section class="section">
                <SectionHeader title="Bestsellers" subtitle="Most loved by our customers" />
                <ProductRail products=bestsellers shell=shell />
            </section>

            <section class="section about-teaser">
                <blockquote class="about-quote">"Crafted with Passion, Worn with Pride"</blockquote>
                {story}
            </section>

            <section class="section">
                <SectionHeader title="New Arrivals" subtitle="Fresh styles just dropped" />
                <ProductRail products=new_arrivals shell=shell />
            </section>

            <section class="section">
                <SectionHeader title="The Brand Promise" subtitle="Why customers trust us" />
                <div class="promise-grid">{promises}</div>
            </section>

            <section class="cta">
                <h2 class="cta-title">{brand.cta_title.clone()}</h2>
                <p class="cta-subtitle">{brand.cta_subtitle.clone()}</p>
                <Button
                    title="Shop Collection Now"
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Lg
                    on_press=move |()| shell.open_shop(CategoryFilter::All)
                />
            </section>

            <footer class="footer">
                <p class="footer-brand">{brand.name}</p>
                <p class="footer-text">{brand.footer}</p>
                <p class="copyright">{brand.copyright}</p>
            </footer>
        </div>
    }
}
