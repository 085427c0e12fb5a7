//! Nav Link Component
//!
//! `<a>` that switches pages through history instead of reloading.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NavLink(
    #[prop(into)] to: String,
    #[prop(into, optional)] class: String,
    #[prop(optional)] on_follow: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let href = to.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        // Let the browser handle new-tab / new-window clicks
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ctx.navigate(&to);
        if let Some(cb) = on_follow {
            cb.run(());
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
