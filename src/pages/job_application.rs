//! Job Application Page
//!
//! Three-step wizard for one job posting. Loads the posting and a security
//! token on mount, posts a multipart form from the last step, then returns
//! to the careers page after a short delay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use kamashka_core::application::APPLICATION_SUCCESS_MESSAGE;
use kamashka_core::{
    ApplicationField, ApplicationForm, ApplicationStep, JobPosting, SubmitBlocked, ViewScope,
    REDIRECT_DELAY,
};

use crate::components::{Loading, NavLink, SubmitAlert, TextField};
use crate::context::AppContext;
use crate::files::{picked_file, read_attachment};

const RESUME_ACCEPT: &str = ".pdf,.doc,.docx";
const RESUME_READ_ERROR: &str = "Could not read the selected file";

#[derive(Clone)]
enum JobState {
    Loading,
    Ready(JobPosting),
    Failed(String),
}

#[component]
pub fn JobApplication(job_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let scope = ViewScope::new();
    let (job, set_job) = signal(JobState::Loading);
    let (form, set_form) = signal(ApplicationForm::new(job_id.clone()));

    // Token and posting are independent; neither waits for the other
    {
        let api = ctx.api();
        let scope = scope.clone();
        spawn_local(async move {
            let token = api.fetch_csrf_token().await;
            if !scope.is_closed() {
                set_form.update(|f| f.set_token(token));
            }
        });
    }
    {
        let api = ctx.api();
        let ticket = scope.begin();
        let scope = scope.clone();
        spawn_local(async move {
            let outcome = api.fetch_job_posting(&job_id).await;
            if !scope.accepts(ticket) {
                return;
            }
            match outcome {
                Ok(posting) => set_job.set(JobState::Ready(posting)),
                Err(err) => {
                    log::error!("Error fetching job {}: {}", job_id, err);
                    set_job.set(JobState::Failed(err.user_message()));
                }
            }
        });
    }

    let on_submit = {
        let scope = scope.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let submission = match set_form.try_update(ApplicationForm::begin_submit) {
                Some(Ok(submission)) => submission,
                // Enter pressed on an earlier step
                Some(Err(SubmitBlocked::NotOnFinalStep)) => {
                    set_form.update(|f| {
                        f.advance();
                    });
                    return;
                }
                Some(Err(blocked)) => {
                    log::debug!("Application submit blocked: {}", blocked);
                    return;
                }
                None => return,
            };

            let api = ctx.api();
            let scope = scope.clone();
            spawn_local(async move {
                let outcome = api.submit_job_application(&submission).await;
                if scope.is_closed() {
                    return;
                }
                let succeeded = outcome.is_ok();
                set_form.update(|f| f.finish_submit(outcome));
                if succeeded {
                    gloo_timers::future::sleep(REDIRECT_DELAY).await;
                    if !scope.is_closed() {
                        ctx.navigate("/careers");
                    }
                }
            });
        }
    };

    let on_resume = {
        let scope = scope.clone();
        move |ev: web_sys::Event| {
            let Some(file) = picked_file(&ev) else {
                set_form.update(|f| f.set_resume(None));
                return;
            };
            let scope = scope.clone();
            spawn_local(async move {
                let read = read_attachment(&file).await;
                if scope.is_closed() {
                    return;
                }
                match read {
                    Ok(attachment) => set_form.update(|f| f.set_resume(Some(attachment))),
                    Err(message) => {
                        log::error!("{}", message);
                        set_form.update(|f| f.reject_resume(RESUME_READ_ERROR));
                    }
                }
            });
        }
    };

    on_cleanup(move || scope.close());

    move || match job.get() {
        JobState::Loading => view! { <Loading message="Loading job details..." /> }.into_any(),
        JobState::Failed(message) => view! {
            <section class="page-status">
                <p class="error-text">{message}</p>
                <NavLink to="/careers" class="btn btn-primary">"Back to Careers"</NavLink>
            </section>
        }
        .into_any(),
        JobState::Ready(posting) => {
            let on_submit = on_submit.clone();
            let on_resume = on_resume.clone();
            view! {
            <section class="job-application">
                <NavLink to="/careers" class="btn btn-text">"Back to Careers"</NavLink>
                {job_summary(posting)}
                <div class="card">
                    {stepper(form)}
                    <SubmitAlert
                        status=Signal::derive(move || form.with(|f| f.status.clone()))
                        success_message=APPLICATION_SUCCESS_MESSAGE
                    />
                    <form on:submit=on_submit novalidate=true>
                        {move || match form.with(|f| f.step()) {
                            ApplicationStep::PersonalInformation => personal_step(form, set_form).into_any(),
                            ApplicationStep::ResumeUpload => resume_step(form, on_resume.clone()).into_any(),
                            ApplicationStep::ReviewSubmit => review_step(form).into_any(),
                        }}
                        {wizard_actions(form, set_form)}
                    </form>
                </div>
            </section>
            }
            .into_any()
        }
    }
}

fn job_summary(job: JobPosting) -> impl IntoView {
    let salary = (!job.salary_range.is_empty()).then(|| format!("Salary: {}", job.salary_range));
    let employment = job.employment_type_label();

    view! {
        <div class="card job-summary">
            <h1>{job.title}</h1>
            <div class="job-details">
                <span class="job-department">{job.department}</span>
                <span class="job-location">{job.location}</span>
                <span class="job-type">{employment}</span>
            </div>
            {salary.map(|s| view! { <span class="chip chip-outline">{s}</span> })}
        </div>
    }
}

fn stepper(form: ReadSignal<ApplicationForm>) -> impl IntoView {
    let steps = form.with_untracked(|f| f.wizard.steps());

    view! {
        <ol class="stepper">
            {steps
                .iter()
                .copied()
                .map(|step| {
                    let class = move || {
                        form.with(|f| {
                            if f.step() == step {
                                "step active"
                            } else if f.wizard.is_completed(step) {
                                "step completed"
                            } else {
                                "step"
                            }
                        })
                    };
                    view! { <li class=class>{step.label()}</li> }
                })
                .collect_view()}
        </ol>
    }
}

fn text_field(
    form: ReadSignal<ApplicationForm>,
    set_form: WriteSignal<ApplicationForm>,
    field: ApplicationField,
) -> impl IntoView {
    let required = field != ApplicationField::CoverLetter;

    view! {
        <TextField
            label=field.label()
            name=field.name()
            value=Signal::derive(move || form.with(|f| f.draft.get(field).to_string()))
            error=Signal::derive(move || form.with(|f| f.errors.get(field).map(str::to_string)))
            on_input=Callback::new(move |value: String| set_form.update(|f| f.set_field(field, value)))
            input_type=if field == ApplicationField::Email { "email" } else { "text" }
            rows=if field == ApplicationField::CoverLetter { 4 } else { 0 }
            required=required
            disabled=Signal::derive(move || form.with(|f| f.submitting))
        />
    }
}

fn personal_step(form: ReadSignal<ApplicationForm>, set_form: WriteSignal<ApplicationForm>) -> impl IntoView {
    [
        ApplicationField::FullName,
        ApplicationField::Email,
        ApplicationField::Phone,
        ApplicationField::Nationality,
        ApplicationField::CoverLetter,
    ]
    .into_iter()
    .map(|field| text_field(form, set_form, field))
    .collect_view()
}

fn resume_step<F>(form: ReadSignal<ApplicationForm>, on_change: F) -> impl IntoView
where
    F: Fn(web_sys::Event) + 'static,
{
    view! {
        <div class="form-field">
            <label for="field-resume">"Upload Resume *"</label>
            <input id="field-resume" type="file" accept=RESUME_ACCEPT on:change=on_change />
            {move || form.with(|f| f.draft.resume.as_ref().map(|file| file.file_name.clone())).map(|name| view! {
                <p class="selected-file">{format!("Selected: {}", name)}</p>
            })}
            {move || form.with(|f| f.errors.get(ApplicationField::Resume).map(str::to_string)).map(|msg| view! {
                <p class="field-error">{msg}</p>
            })}
        </div>
    }
}

fn review_step(form: ReadSignal<ApplicationForm>) -> impl IntoView {
    let rows = form.with(|f| f.draft.review_rows());

    view! {
        <dl class="review">
            {rows
                .into_iter()
                .map(|(label, value)| view! {
                    <dt>{label}</dt>
                    <dd>{if value.is_empty() { "—".to_string() } else { value }}</dd>
                })
                .collect_view()}
        </dl>
    }
}

fn wizard_actions(form: ReadSignal<ApplicationForm>, set_form: WriteSignal<ApplicationForm>) -> impl IntoView {
    let is_first = move || form.with(|f| f.wizard.is_first());
    let is_last = move || form.with(|f| f.wizard.is_last());
    let submitting = move || form.with(|f| f.submitting);

    view! {
        <div class="form-actions">
            <button
                type="button"
                class="btn btn-text"
                disabled=is_first
                on:click=move |_| {
                    set_form.update(|f| {
                        f.back();
                    });
                }
            >
                "Back"
            </button>
            <Show
                when=is_last
                fallback=move || view! {
                    <button
                        type="button"
                        class="btn btn-primary"
                        on:click=move |_| {
                            set_form.update(|f| {
                                f.advance();
                            });
                        }
                    >
                        "Next"
                    </button>
                }
            >
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || !form.with(|f| f.can_submit())
                >
                    {move || if submitting() { "Submitting..." } else { "Submit" }}
                </button>
            </Show>
            <Show when=move || form.with(|f| f.token.is_unavailable())>
                <p class="field-error">"Security configuration issue. Please refresh the page."</p>
            </Show>
        </div>
    }
}
