//! Contact screen

use std::{sync::Arc, time::Duration};

use leptos::prelude::*;
use takaful::{
    contact::{ContactField, ContactForm},
    content::{ContactInfo, StorefrontContent},
};

use crate::{
    components::{
        button::{Button, ButtonSize},
        cards::SectionHeader,
        header::ScreenHeader,
        icon::Icon,
    },
    dialog::Dialog,
    state::{Shell, announce},
};

/// Validate and send the form, then report the outcome in a dialog.
///
/// The form is cleared only when it was accepted.
pub fn submit_contact_form(form: RwSignal<ContactForm>, shell: Shell) {
    let Some(result) = form.try_update(ContactForm::submit) else {
        return;
    };

    match result {
        Ok(submission) => {
            announce(
                shell.live_message,
                format!("Message from {} sent.", submission.name),
            );
            shell.show(Dialog::message_sent());
        }
        Err(error) => shell.show(Dialog::contact_error(&error)),
    }
}

/// How long the send button spins before the outcome is shown.
const SEND_DELAY: Duration = Duration::from_millis(1500);

/// Mark the form as sending. Returns `false` when a send is already underway.
pub fn start_sending(sending: RwSignal<bool>) -> bool {
    if sending.get_untracked() {
        return false;
    }

    sending.set(true);

    true
}

/// Clear the sending flag and submit.
pub fn finish_sending(form: RwSignal<ContactForm>, shell: Shell, sending: RwSignal<bool>) {
    sending.set(false);
    submit_contact_form(form, shell);
}

#[component]
fn InfoCard(info: ContactInfo, shell: Shell) -> impl IntoView {
    let body = view! {
        <Icon name=info.icon.clone() />
        <div class="info-text">
            <span class="info-title">{info.title.clone()}</span>
            <span class="info-value">{info.value.clone()}</span>
        </div>
    };

    match info.action() {
        Some(action) => {
            let dialog = Dialog::contact_action(&action);

            view! {
                <button
                    type="button"
                    class="info-card info-card-action"
                    aria-label=action.prompt()
                    on:click=move |_| shell.show(dialog.clone())
                >
                    {body}
                </button>
            }
            .into_any()
        }
        None => view! { <div class="info-card">{body}</div> }.into_any(),
    }
}

#[component]
fn FormField(field: ContactField, form: RwSignal<ContactForm>) -> impl IntoView {
    let id = format!("contact-{}", field.label().to_lowercase());
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    let value = move || form.with(|form| form.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|form| form.set(field, text));
    };

    let input = match field {
        ContactField::Message => view! {
            <textarea
                id=id.clone()
                class="input input-multiline"
                rows="5"
                placeholder=field.placeholder()
                aria-required=field.is_required().to_string()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        _ => {
            let kind = match field {
                ContactField::Email => "email",
                ContactField::Phone => "tel",
                _ => "text",
            };

            view! {
                <input
                    id=id.clone()
                    class="input"
                    type=kind
                    placeholder=field.placeholder()
                    aria-required=field.is_required().to_string()
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-field">
            <label class="form-label" for=id>{label}</label>
            {input}
        </div>
    }
}

/// Contact details, message form and FAQs.
#[component]
pub fn ContactScreen(shell: Shell, content: Arc<StorefrontContent>) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let sending = RwSignal::new(false);

    let send = move || {
        if start_sending(sending) {
            set_timeout(move || finish_sending(form, shell, sending), SEND_DELAY);
        }
    };

    let info_cards = content
        .contact_info
        .iter()
        .cloned()
        .map(|info| view! { <InfoCard info=info shell=shell /> })
        .collect_view();

    let fields = ContactField::ALL
        .into_iter()
        .map(|field| view! { <FormField field=field form=form /> })
        .collect_view();

    let faqs = content
        .faqs
        .iter()
        .map(|faq| {
            view! {
                <details class="faq">
                    <summary class="faq-question">{faq.question.clone()}</summary>
                    <p class="faq-answer">{faq.answer.clone()}</p>
                </details>
            }
        })
        .collect_view();

    view! {
        <div class="screen contact-screen">
            <ScreenHeader title="Contact Us" shell=shell />

            <section class="section">
                <SectionHeader title="Get in Touch" subtitle="We'd love to hear from you" />
                <div class="info-grid">{info_cards}</div>
            </section>

            <section class="section">
                <SectionHeader title="Send us a Message" />
                <form
                    class="contact-form"
                    novalidate=true
                    on:submit=move |ev| {
                        ev.prevent_default();
                        send();
                    }
                >
                    {fields}
                    <Button
                        title="Send Message"
                        size=ButtonSize::Lg
                        full_width=true
                        loading=sending
                        on_press=move |()| send()
                    />
                </form>
            </section>

            <section class="section">
                <SectionHeader title="Frequently Asked Questions" />
                {faqs}
            </section>
        </div>
    }
}
