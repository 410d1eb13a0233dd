//! Wizard Step Components
//!
//! One component per recommender step. Each reads and writes the shared
//! session store and reports navigation through callbacks.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::Section;
use crate::matches::CollegeMatch;
use crate::wizard::{children_of, Answer, WizardSession, WizardSessionStoreFields, PARENTS};

/// Step 1: importance sliders
#[component]
pub fn WeightsStep(
    session: Store<WizardSession>,
    #[prop(into)] on_continue: Callback<()>,
) -> impl IntoView {
    view! {
        <Section
            title="What do you care about most?"
            description="Adjust sliders to tell us how important each area is."
        >
            <div class="weights-grid">
                {PARENTS.iter().map(|parent| {
                    let id = parent.id;
                    let weight = move || session.weights().with(|w| w.get(id));
                    view! {
                        <div class="weight-row">
                            <div class="weight-header">
                                <span class="weight-label">{parent.label}</span>
                                <span class="badge">{move || format!("{}%", weight())}</span>
                            </div>
                            <input
                                type="range"
                                min="0"
                                max="100"
                                step="1"
                                prop:value=move || weight().to_string()
                                on:input=move |ev| {
                                    if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                                        session.weights().update(|w| w.set(id, value));
                                    }
                                }
                            />
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="wizard-actions end">
                <button class="btn outline" on:click=move |_| session.weights().update(|w| w.reset())>
                    "Reset"
                </button>
                <button class="btn" on:click=move |_| on_continue.run(())>"Continue ›"</button>
            </div>
        </Section>
    }
}

/// Step 2: pick a parent and answer its questions
#[component]
pub fn DrillDownStep(
    session: Store<WizardSession>,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_continue: Callback<()>,
) -> impl IntoView {
    view! {
        <Section
            title="Drill down"
            description="Pick a category to refine, then answer a few quick questions."
        >
            <div class="parent-picker">
                {PARENTS.iter().map(|parent| {
                    let id = parent.id;
                    let is_chosen = move || session.chosen_parent().get() == Some(id);
                    view! {
                        <button
                            class=move || if is_chosen() { "btn small active" } else { "btn small outline" }
                            on:click=move |_| session.chosen_parent().set(Some(id))
                        >
                            {parent.label}
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || session.chosen_parent().get().map(|parent_id| view! {
                <div class="question-grid">
                    {children_of(parent_id).iter().map(|child| {
                        let child_id = child.id;
                        view! {
                            <div class="question-card">
                                <div class="question-title">{child.label}</div>
                                <div class="question-description">"Does this matter to you?"</div>
                                <div class="question-actions">
                                    {Answer::ALL.iter().map(|answer| {
                                        let answer = *answer;
                                        let is_selected = move || {
                                            session.answers().with(|a| a.get(child_id)) == Some(answer)
                                        };
                                        view! {
                                            <button
                                                class=move || if is_selected() { "btn small active" } else { "btn small secondary" }
                                                on:click=move |_| session.answers().update(|a| a.answer(child_id, answer))
                                            >
                                                {answer.label()}
                                            </button>
                                        }
                                    }).collect_view()}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            })}

            <div class="wizard-actions">
                <button class="btn ghost" on:click=move |_| on_back.run(())>"‹ Back"</button>
                <button class="btn" on:click=move |_| on_continue.run(())>"Continue ›"</button>
            </div>
        </Section>
    }
}

/// Step 3: optional free text
#[component]
pub fn FreeTextStep(
    session: Store<WizardSession>,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_continue: Callback<()>,
) -> impl IntoView {
    view! {
        <Section
            title="Anything else?"
            description="Optional: tell us specifics and we'll factor it in."
        >
            <div class="free-text-row">
                <input
                    type="text"
                    placeholder="e.g., bright dorms near the library"
                    prop:value=move || session.free_text().get()
                    on:input=move |ev| session.free_text().set(event_target_value(&ev))
                />
            </div>

            <div class="wizard-actions">
                <button class="btn ghost" on:click=move |_| on_back.run(())>"‹ Back"</button>
                <div class="wizard-actions-group">
                    <button class="btn secondary" on:click=move |_| session.free_text().set(String::new())>
                        "Skip"
                    </button>
                    <button class="btn" on:click=move |_| on_continue.run(())>"See Results ›"</button>
                </div>
            </div>
        </Section>
    }
}

/// Step 4: ranked matches
#[component]
pub fn ResultsStep(
    matches: Vec<CollegeMatch>,
    #[prop(into)] on_refine: Callback<()>,
) -> impl IntoView {
    view! {
        <Section
            title="Your Matches"
            description="Top colleges based on your preferences and reviews."
        >
            <div class="match-list">
                {matches.into_iter().enumerate().map(|(idx, college)| view! {
                    <div class="match-card">
                        <div class="match-header">
                            <div>
                                <div class="match-title">{format!("{}. {}", idx + 1, college.name)}</div>
                                <div class="match-why">{college.why_line()}</div>
                            </div>
                            <div class="match-score">{format!("★ {}%", college.percent())}</div>
                        </div>
                        <div class="score-bar">
                            <div class="score-bar-fill" style=college.bar_style()></div>
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <div class="wizard-actions">
                <button class="btn ghost" on:click=move |_| on_refine.run(())>"‹ Refine"</button>
                <div class="transparency-note">
                    "Transparency: scores combine aspect signals from reviews with your stated preferences."
                </div>
            </div>
        </Section>
    }
}
