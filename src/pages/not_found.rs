//! Not Found Page

use leptos::prelude::*;

use crate::components::NavLink;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page-status">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <NavLink to="/" class="btn btn-primary">"Back to Home"</NavLink>
        </section>
    }
}
