//! Form Field Component
//!
//! Labelled input or textarea with an inline validation message.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    /// Textarea rows; zero renders a single-line input
    #[prop(optional)] rows: u32,
    #[prop(optional)] required: bool,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let id = format!("field-{}", name);
    let is_disabled = move || disabled.get();
    let class = move || {
        if error.with(|e| e.is_some()) { "form-field has-error" } else { "form-field" }
    };

    let control = if rows > 0 {
        view! {
            <textarea
                id=id.clone()
                name=name
                rows=rows.to_string()
                prop:value=move || value.get()
                disabled=is_disabled
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                name=name
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                disabled=is_disabled
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class=class>
            <label for=id>{label}{required.then_some(" *")}</label>
            {control}
            {move || error.get().map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}
