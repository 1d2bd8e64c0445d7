use super::api;
use super::state::{submit_feedback, Feedback, SubmissionPhase};
use super::validation::{validate_request, FCTC_LABEL, ROLL_CALL_LABEL};
use crate::shared::file_validation::{validate_file, FileMeta, ALLOWED_EXTENSIONS};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_generate_reports::{
    AcademicYear, GenerateReports, ReportKind, ReportSummary,
};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

/// Last path segment of a generated report, shown as the link text.
fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[component]
pub fn GenerateReportsPage() -> impl IntoView {
    let (fctc_meta, set_fctc_meta) = signal(None::<FileMeta>);
    let (roll_call_meta, set_roll_call_meta) = signal(None::<FileMeta>);
    let (year, set_year) = signal(String::new());
    let (phase, set_phase) = signal(SubmissionPhase::Idle);
    let (feedback, set_feedback) = signal(None::<Feedback>);
    let (summary, set_summary) = signal(None::<ReportSummary>);

    let fctc_input: NodeRef<html::Input> = NodeRef::new();
    let roll_call_input: NodeRef<html::Input> = NodeRef::new();
    let message_section: NodeRef<html::Div> = NodeRef::new();
    let results_section: NodeRef<html::Div> = NodeRef::new();

    // Re-validate one file input as soon as the user picks a file. An
    // invalid pick is cleared so a stale selection cannot linger in the
    // form; a valid pick clears any earlier error message.
    fn validate_file_on_change(
        ev: &web_sys::Event,
        label: &'static str,
        set_meta: WriteSignal<Option<FileMeta>>,
        set_feedback: WriteSignal<Option<Feedback>>,
    ) {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };

        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            set_meta.set(None);
            return;
        };

        let meta = FileMeta::from_file(&file);
        log::info!("validating {label}: name={}, size={}", meta.name, meta.size);

        let check = validate_file(Some(&meta), label, &ALLOWED_EXTENSIONS);
        if !check.valid {
            log::error!("{label} validation failed: {}", check.message);
            set_feedback.set(Some(Feedback::error(check.message)));
            input.set_value("");
            set_meta.set(None);
            return;
        }

        set_feedback.set(None);
        set_meta.set(Some(meta));
    }

    let on_fctc_change = move |ev: web_sys::Event| {
        validate_file_on_change(&ev, FCTC_LABEL, set_fctc_meta, set_feedback);
    };

    let on_roll_call_change = move |ev: web_sys::Event| {
        validate_file_on_change(&ev, ROLL_CALL_LABEL, set_roll_call_meta, set_feedback);
    };

    // Advisory readiness: re-checked on every field change to style the
    // trigger button and its tooltip. Never blocks a submit attempt; the
    // submit handler validates independently.
    let readiness = Signal::derive(move || {
        validate_request(
            fctc_meta.get().as_ref(),
            roll_call_meta.get().as_ref(),
            &year.get(),
        )
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if !phase.get_untracked().can_submit() {
            return;
        }

        // A new cycle starts clean: drop the previous message and results.
        set_feedback.set(None);
        set_summary.set(None);

        let fctc = fctc_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let roll_call = roll_call_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let year_value = year.get_untracked();

        let fctc_meta_now = fctc.as_ref().map(FileMeta::from_file);
        let roll_call_meta_now = roll_call.as_ref().map(FileMeta::from_file);

        let check = validate_request(
            fctc_meta_now.as_ref(),
            roll_call_meta_now.as_ref(),
            &year_value,
        );
        if !check.valid {
            log::error!("validation failed: {}", check.message);
            set_feedback.set(Some(Feedback::error(check.message)));
            return;
        }

        // Presence was just validated.
        let (Some(fctc), Some(roll_call)) = (fctc, roll_call) else {
            return;
        };

        log::info!(
            "submitting files: fctc={}, roll_call={}, year={}",
            fctc.name(),
            roll_call.name(),
            year_value
        );

        set_phase.set(SubmissionPhase::Submitting);

        spawn_local(async move {
            let outcome = api::process_files(&fctc, &roll_call, &year_value).await;

            // Leave the submitting state before rendering the outcome so
            // the trigger is restored on every exit path.
            set_phase.set(SubmissionPhase::Idle);

            if let Err(error) = &outcome {
                log::error!("submission failed: {error}");
            }

            let (message, report_summary) = submit_feedback(outcome);
            set_feedback.set(Some(message));
            set_summary.set(report_summary);
        });
    };

    // Bring a fresh message or results panel into view, like the original
    // page did.
    Effect::new(move || {
        if feedback.get().is_some() {
            if let Some(section) = message_section.get() {
                section.scroll_into_view();
            }
        }
    });

    Effect::new(move || {
        if summary.get().is_some() {
            if let Some(section) = results_section.get() {
                section.scroll_into_view();
            }
        }
    });

    view! {
        <div class="page page--narrow">
            <div class="card">
                <div class="card__body">
                    <h2 class="section-title">{GenerateReports::display_name()}</h2>
                    <p class="section-subtitle">{GenerateReports::description()}</p>

                    <form class="upload-form" on:submit=on_submit>
                        <div class="form__group">
                            <label class="form__label" for="fctc_file">"FCTC Excel file:"</label>
                            <input
                                id="fctc_file"
                                type="file"
                                accept=".xlsx,.xls"
                                node_ref=fctc_input
                                on:change=on_fctc_change
                            />
                            {move || fctc_meta.get().map(|meta| view! {
                                <span class="form__filehint">
                                    {format!("{} ({:.2} KB)", meta.name, meta.size as f64 / 1024.0)}
                                </span>
                            })}
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="roll_call_file">"Roll Call Excel file:"</label>
                            <input
                                id="roll_call_file"
                                type="file"
                                accept=".xlsx,.xls"
                                node_ref=roll_call_input
                                on:change=on_roll_call_change
                            />
                            {move || roll_call_meta.get().map(|meta| view! {
                                <span class="form__filehint">
                                    {format!("{} ({:.2} KB)", meta.name, meta.size as f64 / 1024.0)}
                                </span>
                            })}
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="year">"Academic year:"</label>
                            <select
                                id="year"
                                class="form__select"
                                prop:value=move || year.get()
                                on:change=move |ev| set_year.set(event_target_value(&ev))
                            >
                                <option value="">"Select academic year"</option>
                                {AcademicYear::ALL
                                    .iter()
                                    .map(|y| view! {
                                        <option value=y.as_str()>{y.label()}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="form__actions">
                            <button
                                type="submit"
                                class="button button--primary"
                                prop:disabled=move || !phase.get().can_submit()
                                style:opacity=move || if readiness.get().valid { "1" } else { "0.7" }
                                title=move || {
                                    let check = readiness.get();
                                    if check.valid {
                                        "Click to generate reports".to_string()
                                    } else {
                                        check.message
                                    }
                                }
                            >
                                {move || if phase.get().can_submit() {
                                    "Generate Reports"
                                } else {
                                    "Generating Reports..."
                                }}
                            </button>
                            <Show when=move || !phase.get().can_submit()>
                                <Space gap=SpaceGap::Small>
                                    <Spinner />
                                    <span class="form__busyhint">"Processing files..."</span>
                                </Space>
                            </Show>
                        </div>
                    </form>

                    {move || feedback.get().map(|message| view! {
                        <div class="message-section" node_ref=message_section>
                            <div class=message.css_class()>{message.text.clone()}</div>
                        </div>
                    })}

                    {move || summary.get().map(|data| {
                        let files = data.generated_files.clone().unwrap_or_default();
                        let has_stats = data.matched_students.is_some()
                            || data.year.is_some()
                            || data.generated_files.is_some();
                        view! {
                            <div class="results-section" node_ref=results_section>
                                {has_stats.then(|| view! {
                                    <div class="stats">
                                        <h4>"Processing Summary"</h4>
                                        {data.matched_students.map(|count| view! {
                                            <div class="stat-item">
                                                <span class="stat-label">"Matched Students:"</span>
                                                <span class="stat-value">{count}</span>
                                            </div>
                                        })}
                                        {data.year.clone().map(|year| view! {
                                            <div class="stat-item">
                                                <span class="stat-label">"Academic Year:"</span>
                                                <span class="stat-value">{year}</span>
                                            </div>
                                        })}
                                        {(!files.is_empty()).then(|| view! {
                                            <div class="stat-item">
                                                <span class="stat-label">"Reports Generated:"</span>
                                                <span class="stat-value">{files.len()}</span>
                                            </div>
                                        })}
                                    </div>
                                })}
                                {(!files.is_empty()).then(|| view! {
                                    <h4>"Download Reports:"</h4>
                                    <ul class="file-list">
                                        {files.iter().map(|path| {
                                            let label = ReportKind::classify(path).label();
                                            let text = format!("📄 {} ({})", file_name(path), label);
                                            view! {
                                                <li>
                                                    <a
                                                        href=api::download_href(path)
                                                        class="download-link"
                                                        target="_blank"
                                                    >
                                                        {text}
                                                    </a>
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                })}
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
