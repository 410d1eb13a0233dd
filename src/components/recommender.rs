//! Recommender Wizard Component
//!
//! Guided four-step flow that collects preferences and shows matches.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::wizard_steps::{DrillDownStep, FreeTextStep, ResultsStep, WeightsStep};
use crate::matches::{MatchProvider, MockMatchProvider};
use crate::wizard::{WizardSession, WizardSessionStoreFields, WizardStep};

/// Card wrapper used by every step
#[component]
pub fn Section(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card section">
            <div class="card-header">
                <h2 class="card-title">{title}</h2>
                {description.map(|d| view! { <p class="card-description">{d}</p> })}
            </div>
            <div class="card-content">{children()}</div>
        </div>
    }
}

#[component]
pub fn RecommenderWizard() -> impl IntoView {
    let session = Store::new(WizardSession::default());
    let provider = MockMatchProvider;

    // All step changes go through the transition table
    let go_to = move |target: WizardStep| {
        let current = session.step().get_untracked();
        match current.transition_to(target) {
            Ok(step) => {
                log::debug!("[WIZARD] Step {} -> {}", current.index(), step.index());
                session.step().set(step);
            }
            Err(e) => log::warn!("[WIZARD] {}", e),
        }
    };

    let advance = move || go_to(session.step().get_untracked().next());
    let retreat = move || go_to(session.step().get_untracked().prev());

    // TODO: POST /start_session with the weights once the endpoint exists
    let start_session = move || {
        log::info!("[WIZARD] Starting session");
        go_to(WizardStep::DrillDown);
    };

    let rank = move || provider.rank(&session.with_untracked(|s| s.query()));

    view! {
        <div class="wizard">
            // Header
            <div class="wizard-header">
                <h1>"RateMyCollege – Guided Recommender"</h1>
                <progress class="wizard-progress" max="100" value=move || session.step().get().progress().to_string()></progress>
            </div>

            {move || match session.step().get() {
                WizardStep::Weights => view! {
                    <WeightsStep session=session on_continue=move |_| start_session() />
                }.into_any(),
                WizardStep::DrillDown => view! {
                    <DrillDownStep
                        session=session
                        on_back=move |_| retreat()
                        on_continue=move |_| advance()
                    />
                }.into_any(),
                WizardStep::FreeText => view! {
                    <FreeTextStep
                        session=session
                        on_back=move |_| retreat()
                        on_continue=move |_| advance()
                    />
                }.into_any(),
                WizardStep::Results => view! {
                    <ResultsStep
                        matches=rank()
                        on_refine=move |_| go_to(WizardStep::DrillDown)
                    />
                }.into_any(),
            }}
        </div>
    }
}
