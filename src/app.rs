//! Kamashka Frontend App
//!
//! Root component: builds the API client, provides context, and swaps pages
//! on navigation.

use leptos::ev;
use leptos::prelude::*;

use kamashka_core::{ReqwestTransport, SiteApi, SiteConfig};

use crate::components::{Footer, Header};
use crate::context::{current_path, AppContext};
use crate::pages::{
    About, Blogs, Careers, Contact, Home, JobApplication, NotFound, Portfolio, ViewBlog,
};
use crate::routes::Route;

#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::from_build_env();
    log::info!("API base URL: {}", config.api_base_url);

    let transport = match ReqwestTransport::new(config) {
        Ok(transport) => transport,
        Err(err) => {
            log::error!("Failed to build HTTP client: {}", err);
            return view! {
                <div class="app-fatal">
                    <h1>"Something went wrong"</h1>
                    <p>{err.user_message()}</p>
                </div>
            }
            .into_any();
        }
    };

    let route = signal(Route::parse(&current_path()));
    let ctx = AppContext::new(route, SiteApi::new(transport));
    provide_context(ctx);

    // Back/forward buttons; the root lives as long as the page
    let _ = window_event_listener(ev::popstate, move |_| {
        ctx.show(Route::parse(&current_path()));
    });

    view! {
        <div class="app">
            <Header />
            <main class="page">
                {move || match ctx.route.get() {
                    Route::Home => view! { <Home /> }.into_any(),
                    Route::About => view! { <About /> }.into_any(),
                    Route::Careers => view! { <Careers /> }.into_any(),
                    Route::JobApplication(job_id) => view! { <JobApplication job_id=job_id /> }.into_any(),
                    Route::Blog => view! { <Blogs /> }.into_any(),
                    Route::BlogPost(slug) => view! { <ViewBlog slug=slug /> }.into_any(),
                    Route::Contact => view! { <Contact /> }.into_any(),
                    Route::Portfolio => view! { <Portfolio /> }.into_any(),
                    Route::NotFound => view! { <NotFound /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
    .into_any()
}
