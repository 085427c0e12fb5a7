//! Blogs Page
//!
//! Filterable, paginated post list. Every filter or page change issues a
//! new request; only the latest response is applied.

use leptos::prelude::*;
use leptos::task::spawn_local;

use kamashka_core::{BlogPost, FilterState, ListState, ViewScope};

use crate::components::{LoadError, Loading, NavLink, Pagination};
use crate::context::AppContext;

const SUMMARY_CHARS: usize = 120;

#[component]
pub fn Blogs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let scope = ViewScope::new();

    let (filters, set_filters) = signal(FilterState::new());
    let (list, set_list) = signal(ListState::<BlogPost>::new());
    let (categories, set_categories) = signal(Vec::<String>::new());

    // Category facet, once per mount
    {
        let api = ctx.api();
        let scope = scope.clone();
        spawn_local(async move {
            let outcome = api.list_blog_categories().await;
            if scope.is_closed() {
                return;
            }
            match outcome {
                Ok(found) => set_categories.set(found),
                Err(err) => {
                    log::error!("Error fetching categories: {}", err);
                    set_list.update(|state| state.fail(err.user_message()));
                }
            }
        });
    }

    // Posts, whenever the filters or page change
    {
        let scope = scope.clone();
        Effect::new(move |_| {
            let query = filters.get();
            let ticket = scope.begin();
            set_list.update(|state| state.begin());

            let api = ctx.api();
            let scope = scope.clone();
            spawn_local(async move {
                let outcome = api.list_blog_posts(&query).await;
                if scope.accepts(ticket) {
                    set_list.update(|state| state.apply(outcome));
                } else {
                    log::debug!("Dropping stale blog list response for page {}", query.page());
                }
            });
        });
    }

    on_cleanup(move || scope.close());

    let edit = move |apply: fn(&mut FilterState, String)| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            set_filters.update(|f| {
                apply(f, value);
                f.reset_page();
            });
        }
    };

    let go_to_page = Callback::new(move |page: u32| {
        set_filters.update(|f| f.set_page(page));
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <section class="page-hero">
            <h1>"Our Blogs"</h1>
            <p class="lead">
                "Insights, tips, and news from the world of technology and digital innovation."
            </p>
        </section>

        <section class="filters">
            <input
                type="search"
                placeholder="Search blogs..."
                prop:value=move || filters.with(|f| f.search().to_string())
                on:input=edit(|f, v| f.set_search(v))
            />
            <select
                prop:value=move || filters.with(|f| f.category().to_string())
                on:change=edit(|f, v| f.set_category(v))
            >
                <option value="">"All Categories"</option>
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|cat| view! { <option value=cat.clone()>{cat.clone()}</option> })
                        .collect_view()
                }}
            </select>
            <input
                type="text"
                placeholder="Author"
                prop:value=move || filters.with(|f| f.author().to_string())
                on:input=edit(|f, v| f.set_author(v))
            />
        </section>

        {move || {
            let state = list.get();
            if state.loading {
                return view! { <Loading message="Loading blogs..." /> }.into_any();
            }
            if let Some(message) = state.error {
                return view! { <LoadError message=message /> }.into_any();
            }
            if state.items.is_empty() {
                return view! {
                    <div class="empty-state">
                        <p>"No blog posts found."</p>
                    </div>
                }
                .into_any();
            }

            let pages = state.total_pages.unwrap_or(1);
            view! {
                <section class="blog-grid">
                    {state.items.into_iter().map(blog_card).collect_view()}
                </section>
                {(pages > 1).then(|| view! {
                    <Pagination
                        page=Signal::derive(move || filters.with(|f| f.page()))
                        total=Signal::derive(move || pages)
                        on_change=go_to_page
                    />
                })}
            }
            .into_any()
        }}
    }
}

fn blog_card(post: BlogPost) -> impl IntoView {
    let href = post.route_key().map(|key| format!("/blog/{}", key));
    let summary = post.summary(SUMMARY_CHARS);
    let date = post.display_date();
    let byline = post.byline().map(str::to_string);
    let image = post.image_or_placeholder().to_string();
    let category = (!post.category.is_empty()).then(|| post.category.clone());

    view! {
        <article class="card blog-card">
            <img class="card-media" src=image alt=post.title.clone() />
            <div class="card-body">
                {category.map(|c| view! { <span class="chip chip-category">{c}</span> })}
                <h3>{post.title}</h3>
                <p>{summary}</p>
                <div class="meta">
                    {date.map(|d| view! { <span class="meta-date">{d}</span> })}
                    {byline.map(|a| view! { <span class="meta-author">{a}</span> })}
                </div>
                {href.map(|href| view! {
                    <NavLink to=href class="btn btn-primary">"Read More"</NavLink>
                })}
            </div>
        </article>
    }
}
