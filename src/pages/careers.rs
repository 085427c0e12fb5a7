//! Careers Page
//!
//! Open positions with a link into the application wizard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use kamashka_core::display::truncate_text;
use kamashka_core::{JobPosting, ListState, ViewScope};

use crate::components::{LoadError, Loading, NavLink};
use crate::context::AppContext;

const DESCRIPTION_CHARS: usize = 150;

#[component]
pub fn Careers() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let scope = ViewScope::new();
    let (list, set_list) = signal(ListState::<JobPosting>::new());

    {
        let api = ctx.api();
        let ticket = scope.begin();
        let scope = scope.clone();
        spawn_local(async move {
            let outcome = api.list_job_postings().await;
            if scope.accepts(ticket) {
                set_list.update(|state| state.apply(outcome));
            }
        });
    }

    on_cleanup(move || scope.close());

    move || {
        let state = list.get();
        if state.loading {
            return view! { <Loading message="Loading career opportunities..." /> }.into_any();
        }
        if let Some(message) = state.error {
            return view! { <LoadError message=message /> }.into_any();
        }

        view! {
            <section class="page-hero">
                <h1>"Join Our Team"</h1>
                <p class="lead">
                    "Be part of our innovative team and work on cutting-edge projects that make a "
                    "real impact in the digital world."
                </p>
            </section>
            <section class="job-list">
                {if state.items.is_empty() {
                    view! { <p class="empty-state">"No open positions right now. Check back soon."</p> }.into_any()
                } else {
                    state.items.into_iter().map(job_card).collect_view().into_any()
                }}
            </section>
        }
        .into_any()
    }
}

fn employment_class(code: &str) -> &'static str {
    match code {
        "full_time" => "chip chip-success",
        "part_time" => "chip chip-info",
        "contract" => "chip chip-warning",
        "internship" => "chip chip-secondary",
        _ => "chip",
    }
}

fn job_card(job: JobPosting) -> impl IntoView {
    let label = job.employment_type_label();
    let chip_class = employment_class(&job.employment_type);
    let description = truncate_text(&job.description, DESCRIPTION_CHARS);
    let salary = (!job.salary_range.is_empty()).then(|| job.salary_range.clone());
    let apply_href = job.id.as_ref().map(|id| format!("/careers/{}/apply", id));

    view! {
        <article class="card job-card">
            <div class="job-main">
                <h3>{job.title}</h3>
                <div class="job-details">
                    <span class="job-department">{job.department}</span>
                    <span class="job-location">{job.location}</span>
                    <span class="job-type">{label.clone()}</span>
                </div>
                {salary.map(|s| view! { <p class="job-salary">{s}</p> })}
                <span class=chip_class>{label}</span>
                <p class="job-description">{description}</p>
            </div>
            <div class="job-actions">
                {apply_href.map(|href| view! {
                    <NavLink to=href class="btn btn-primary">"Apply Now"</NavLink>
                })}
            </div>
        </article>
    }
}
