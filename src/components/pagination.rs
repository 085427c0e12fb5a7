//! Pagination Component

use leptos::prelude::*;

/// Page buttons for `1..=total`; hidden by the caller when there is one page
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <nav class="pagination" aria-label="pagination">
            <button
                class="page-btn"
                disabled=move || page.get() <= 1
                on:click=move |_| on_change.run(page.get_untracked().saturating_sub(1).max(1))
            >
                "‹"
            </button>
            {move || {
                (1..=total.get())
                    .map(|n| {
                        let class = move || if page.get() == n { "page-btn active" } else { "page-btn" };
                        view! {
                            <button class=class on:click=move |_| on_change.run(n)>
                                {n}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="page-btn"
                disabled=move || page.get() >= total.get()
                on:click=move |_| on_change.run(page.get_untracked() + 1)
            >
                "›"
            </button>
        </nav>
    }
}
