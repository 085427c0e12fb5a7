//! Header Component
//!
//! Brand, desktop navigation, and the collapsible mobile menu.

use leptos::prelude::*;

use crate::components::NavLink;
use crate::context::AppContext;
use crate::routes::NAV_ITEMS;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = Callback::new(move |_: ()| set_menu_open.set(false));

    let links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .map(|(label, path)| {
                let class = move || {
                    let base = if mobile { "mobile-nav-link" } else { "nav-link" };
                    if ctx.is_active(path) { format!("{} active", base) } else { base.to_string() }
                };
                view! {
                    <span class=class>
                        <NavLink to=*path on_follow=close_menu>{*label}</NavLink>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <div class="toolbar">
                <NavLink to="/" class="brand">"Kamashka"</NavLink>
                <nav class="desktop-nav">{links(false)}</nav>
                <button
                    class="menu-toggle"
                    aria-label="open drawer"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="mobile-nav">{links(true)}</nav>
            </Show>
        </header>
    }
}
