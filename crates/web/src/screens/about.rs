//! About screen

use std::sync::Arc;

use leptos::prelude::*;
use takaful::content::{StorefrontContent, Testimonial};

use crate::{
    components::{
        cards::{PromiseCard, SectionHeader},
        header::ScreenHeader,
        icon::Icon,
        product_card::Stars,
    },
    state::Shell,
};

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initial = testimonial.initial().map(String::from).unwrap_or_default();
    let filled = testimonial.filled_stars();

    view! {
        <figure class="testimonial-card">
            <div class="testimonial-header">
                <span class="avatar" aria-hidden="true">{initial}</span>
                <div>
                    <figcaption class="testimonial-name">{testimonial.name}</figcaption>
                    <Stars filled=filled />
                </div>
            </div>
            <blockquote class="testimonial-comment">{format!("\"{}\"", testimonial.comment)}</blockquote>
            <p class="testimonial-date">{testimonial.date}</p>
        </figure>
    }
}

/// Brand story, mission, stats, values, testimonials and reasons to buy.
#[component]
pub fn AboutScreen(shell: Shell, content: Arc<StorefrontContent>) -> impl IntoView {
    let brand = &content.brand;

    let story = brand
        .story
        .iter()
        .map(|paragraph| view! { <p class="story-text">{paragraph.clone()}</p> })
        .collect_view();

    let stats = content
        .stats
        .iter()
        .map(|stat| {
            view! {
                <div class="stat">
                    <span class="stat-value">{stat.value.clone()}</span>
                    <span class="stat-label">{stat.label.clone()}</span>
                </div>
            }
        })
        .collect_view();

    let promises = content
        .brand_promises
        .iter()
        .cloned()
        .map(|promise| view! { <PromiseCard promise=promise /> })
        .collect_view();

    let testimonials = content
        .testimonials
        .iter()
        .cloned()
        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
        .collect_view();

    let reasons = content
        .reasons
        .iter()
        .map(|reason| {
            view! {
                <li class="reason">
                    <Icon name=reason.icon.clone() />
                    <div>
                        <h3 class="reason-title">{reason.title.clone()}</h3>
                        <p class="reason-description">{reason.description.clone()}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="screen about-screen">
            <ScreenHeader title="About Us" shell=shell />

            <section class="about-hero">
                <blockquote class="about-quote">"Crafted with Passion, Worn with Pride"</blockquote>
            </section>

            <section class="section">
                <SectionHeader title="Our Story" />
                {story}
            </section>

            <section class="section mission">
                <h2 class="mission-title">"Our Mission"</h2>
                <p class="mission-text">{brand.mission.clone()}</p>
                <div class="stat-row">{stats}</div>
            </section>

            <section class="section">
                <SectionHeader title="Our Values" subtitle="What we stand for" />
                <div class="promise-grid">{promises}</div>
            </section>

            <section class="section">
                <SectionHeader title="What Our Customers Say" />
                <div class="testimonial-rail">{testimonials}</div>
            </section>

            <section class="section">
                <SectionHeader title="Why Choose Us" />
                <ul class="reason-list">{reasons}</ul>
            </section>
        </div>
    }
}
