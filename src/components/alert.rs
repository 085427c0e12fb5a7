//! Alerts
//!
//! Status banners, loading and error placeholders.

use leptos::prelude::*;

use kamashka_core::SubmitStatus;

#[component]
pub fn Alert(#[prop(into)] kind: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("alert alert-{}", kind) role="alert">
            {children()}
        </div>
    }
}

/// Outcome of a form submission, rendered above the form
#[component]
pub fn SubmitAlert(
    #[prop(into)] status: Signal<SubmitStatus>,
    success_message: &'static str,
) -> impl IntoView {
    move || match status.get() {
        SubmitStatus::Idle => None,
        SubmitStatus::Succeeded => Some(view! { <Alert kind="success">{success_message}</Alert> }.into_any()),
        SubmitStatus::Failed(message) => Some(view! { <Alert kind="error">{message}</Alert> }.into_any()),
    }
}

#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="page-status">
            <div class="spinner"></div>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn LoadError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="page-status">
            <p class="error-text">{format!("Error: {}", message)}</p>
        </div>
    }
}
