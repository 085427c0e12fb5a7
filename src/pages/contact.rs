//! Contact Page
//!
//! Contact form plus office details. The send button stays disabled until
//! a security token has been acquired.

use leptos::prelude::*;
use leptos::task::spawn_local;

use kamashka_core::contact::CONTACT_SUCCESS_MESSAGE;
use kamashka_core::{ContactField, ContactForm, ViewScope};

use crate::components::{SubmitAlert, TextField};
use crate::context::AppContext;

/// (title, details)
const CONTACT_INFO: &[(&str, &str)] = &[
    ("Address", "123 Tech Street, 6th October City, Egypt"),
    ("Phone", "+20 100 774 5941"),
    ("Email", "info@kamshka.com"),
    ("Business Hours", "Sunday - Thursday: 9AM - 5PM\nFriday - Saturday: Closed"),
];

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d7283941.742899037!2d29.56882434999999!3d26.858953600000003!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x1436890d24a8261b%3A0x1f2b74b3f2b8f3b2!2s6th%20of%20October%20City%2C%20Giza%20Governorate%2C%20Egypt!5e0!3m2!1sen!2sus!4v1665677183863!5m2!1sen!2sus";

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let scope = ViewScope::new();
    let (form, set_form) = signal(ContactForm::new());

    // Security token, once per mount
    {
        let api = ctx.api();
        let scope = scope.clone();
        spawn_local(async move {
            let token = api.fetch_csrf_token().await;
            if !scope.is_closed() {
                set_form.update(|f| f.set_token(token));
            }
        });
    }

    let on_submit = {
        let scope = scope.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let submission = match set_form.try_update(ContactForm::begin_submit) {
                Some(Ok(submission)) => submission,
                Some(Err(blocked)) => {
                    log::debug!("Contact submit blocked: {}", blocked);
                    return;
                }
                None => return,
            };

            let api = ctx.api();
            let scope = scope.clone();
            spawn_local(async move {
                let outcome = api.submit_contact(&submission).await;
                if !scope.is_closed() {
                    set_form.update(|f| f.finish_submit(outcome));
                }
            });
        }
    };

    on_cleanup(move || scope.close());

    let submitting = Signal::derive(move || form.with(|f| f.submitting));
    let field = move |field: ContactField| {
        view! {
            <TextField
                label=field.label()
                name=field.name()
                value=Signal::derive(move || form.with(|f| f.draft.get(field).to_string()))
                error=Signal::derive(move || form.with(|f| f.errors.get(field).map(str::to_string)))
                on_input=Callback::new(move |value: String| set_form.update(|f| f.set_field(field, value)))
                input_type=if field == ContactField::Email { "email" } else { "text" }
                rows=if field == ContactField::Message { 5 } else { 0 }
                disabled=submitting
            />
        }
    };

    view! {
        <section class="page-hero">
            <span class="chip">"Contact Us"</span>
            <h1>"Get In Touch With Us"</h1>
            <p class="lead">
                "Have a question or want to discuss a project? We'd love to hear from you. "
                "Send us a message and we'll respond as soon as possible."
            </p>
        </section>

        <section class="card contact-form">
            <h2>"Send Us a Message"</h2>
            <p>"Fill out the form below and we'll get back to you as soon as possible"</p>

            <SubmitAlert
                status=Signal::derive(move || form.with(|f| f.status.clone()))
                success_message=CONTACT_SUCCESS_MESSAGE
            />

            <form on:submit=on_submit novalidate=true>
                {ContactField::ALL.into_iter().map(field).collect_view()}
                <div class="form-actions">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || !form.with(|f| f.can_submit())
                    >
                        {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                    </button>
                    <Show when=move || form.with(|f| f.token.is_unavailable())>
                        <p class="field-error">"Security configuration issue. Please refresh the page."</p>
                    </Show>
                </div>
            </form>
        </section>

        <section class="contact-info">
            <h2>"Contact Information"</h2>
            <div class="info-grid">
                {CONTACT_INFO
                    .iter()
                    .map(|(title, details)| view! {
                        <div class="info-item">
                            <h4>{*title}</h4>
                            <p class="pre-line">{*details}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="contact-map">
            <h2>"Our Location"</h2>
            <p>"Visit us at our office in 6th October City, Egypt"</p>
            <iframe
                src=MAP_EMBED_URL
                width="100%"
                height="400"
                style="border:0"
                {..leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")}
                referrerpolicy="no-referrer-when-downgrade"
                title="Kamashka Office Location in 6th October City, Egypt"
            ></iframe>
        </section>
    }
}
