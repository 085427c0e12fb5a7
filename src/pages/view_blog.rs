//! Blog Post Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use kamashka_core::{BlogPost, ViewScope};

use crate::components::{Loading, NavLink};
use crate::context::AppContext;

#[derive(Clone)]
enum PostState {
    Loading,
    Ready(BlogPost),
    Failed(String),
}

#[component]
pub fn ViewBlog(slug: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let scope = ViewScope::new();
    let (post, set_post) = signal(PostState::Loading);

    {
        let api = ctx.api();
        let ticket = scope.begin();
        let scope = scope.clone();
        spawn_local(async move {
            let outcome = api.fetch_blog_post(&slug).await;
            if !scope.accepts(ticket) {
                return;
            }
            match outcome {
                Ok(found) => set_post.set(PostState::Ready(found)),
                Err(err) => {
                    log::error!("Error fetching blog {}: {}", slug, err);
                    set_post.set(PostState::Failed(err.user_message()));
                }
            }
        });
    }

    on_cleanup(move || scope.close());

    move || match post.get() {
        PostState::Loading => view! { <Loading message="Loading article..." /> }.into_any(),
        PostState::Failed(message) => view! {
            <section class="page-status">
                <p class="error-text">{message}</p>
                <NavLink to="/blog" class="btn btn-primary">"Back to Blogs"</NavLink>
            </section>
        }
        .into_any(),
        PostState::Ready(post) => article(post).into_any(),
    }
}

fn article(post: BlogPost) -> impl IntoView {
    let date = post.display_date();
    let author = post.byline().map(str::to_string);
    let category = (!post.category.is_empty()).then(|| post.category.clone());
    let image = post.featured_image.clone();
    let title = post.title.clone();

    view! {
        <article class="blog-article">
            <NavLink to="/blog" class="btn btn-outline">"Back to Blogs"</NavLink>

            <header class="article-header">
                {category.map(|c| view! { <span class="chip chip-category">{c}</span> })}
                <h1>{post.title}</h1>
                <div class="meta">
                    {date.map(|d| view! { <span class="meta-date">{d}</span> })}
                    {author.map(|a| view! { <span class="meta-author">{format!("By {}", a)}</span> })}
                    <button class="btn btn-small btn-outline" on:click=move |_| share_link()>"Share"</button>
                </div>
                {image.map(|src| view! { <img class="article-image" src=src alt=title /> })}
            </header>

            <div class="article-content" inner_html=post.content></div>

            <footer class="article-cta">
                <h3>"Enjoyed this article?"</h3>
                <p>"Share it with others or explore more insights from our blog."</p>
                <div class="cta-row">
                    <button class="btn btn-primary" on:click=move |_| share_link()>"Share Article"</button>
                    <NavLink to="/blog" class="btn btn-outline">"More Articles"</NavLink>
                </div>
            </footer>
        </article>
    }
}

/// Copy the current URL to the clipboard, confirming only once written
fn share_link() {
    let Some(window) = web_sys::window() else { return };
    let Ok(href) = window.location().href() else { return };
    let write = window.navigator().clipboard().write_text(&href);

    spawn_local(async move {
        match JsFuture::from(write).await {
            Ok(_) => {
                let _ = window.alert_with_message("Link copied to clipboard!");
            }
            Err(err) => log::warn!("Failed to copy link: {:?}", err),
        }
    });
}
