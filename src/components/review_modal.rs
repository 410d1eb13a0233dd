//! Review Modal Component
//!
//! Dialog for rating a college: category checkboxes with their rating
//! inputs, comment text with debounced tag suggestions, manual tags and
//! submission to the college endpoint.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::browser;
use crate::college;
use crate::components::{CustomTagInput, RatingInputs, TagArea};
use crate::context::use_app_context;
use crate::debounce::{DebounceToken, Ticket};
use crate::models::Category;
use crate::review::{RatingBlock, ReviewDraft, TagChips};

/// Alert text for a submission result
pub fn submit_message(result: &Result<(), ApiError>) -> &'static str {
    match result {
        Ok(()) => "✅ Review submitted!",
        Err(e) if e.is_rejected() => "⚠️ Failed to submit review.",
        Err(_) => "Error submitting review.",
    }
}

/// Wait out the idle delay, then replace the tag area with suggestions.
/// Does nothing once `ticket` has been superseded by a newer edit.
async fn suggest_tags(
    ticket: Ticket,
    url: String,
    delay_ms: u32,
    text: RwSignal<String>,
    tags: RwSignal<TagChips>,
) {
    TimeoutFuture::new(delay_ms).await;
    if !tags.try_update(|t| t.start_suggestions(&ticket)).unwrap_or(false) {
        return;
    }

    let body = text.get_untracked();
    let result = api::generate_tags(&url, &body).await;
    match &result {
        Ok(suggested) => log::debug!("[MODAL] Got {} tag suggestions", suggested.len()),
        Err(e) => log::warn!("[MODAL] Tag suggestion failed: {}", e),
    }

    if !tags.try_update(|t| t.apply_suggestions(&ticket, result)).unwrap_or(false) {
        log::debug!("[MODAL] Dropping stale tag response (generation {})", ticket.generation());
    }
}

/// Signals behind the modal inputs
#[derive(Clone, Copy)]
struct DraftSignals {
    user: RwSignal<String>,
    text: RwSignal<String>,
    ratings: RwSignal<RatingBlock>,
    tags: RwSignal<TagChips>,
    debounce: StoredValue<DebounceToken>,
}

impl DraftSignals {
    fn new() -> Self {
        Self {
            user: RwSignal::new(String::new()),
            text: RwSignal::new(String::new()),
            ratings: RwSignal::new(RatingBlock::default()),
            tags: RwSignal::new(TagChips::default()),
            debounce: StoredValue::new(DebounceToken::new()),
        }
    }

    fn snapshot(&self) -> ReviewDraft {
        ReviewDraft {
            user: self.user.get_untracked(),
            text: self.text.get_untracked(),
            ratings: self.ratings.get_untracked(),
            tags: self.tags.get_untracked(),
        }
    }

    /// Empty every input and drop pending tag suggestions
    fn discard(&self) {
        self.debounce.with_value(|d| d.cancel());
        self.user.set(String::new());
        self.text.set(String::new());
        self.ratings.set(RatingBlock::default());
        self.tags.set(TagChips::default());
    }
}

/// Review modal
///
/// The draft starts empty each time the dialog opens. Closing it, or a
/// successful submit, throws the draft away.
#[component]
pub fn ReviewModal(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let debounce_ms = config.tag_debounce_ms;
    let reload_on_submit = config.reload_on_submit;

    let draft = DraftSignals::new();
    let DraftSignals { user, text, ratings, tags, debounce } = draft;

    let close = move || {
        set_open.set(false);
        draft.discard();
    };

    let on_text_input = move |ev: web_sys::Event| {
        text.set(event_target_value(&ev));
        let ticket = debounce.with_value(|d| d.restart());
        let url = ctx.endpoint(api::GENERATE_TAGS_PATH);
        spawn_local(suggest_tags(ticket, url, debounce_ms, text, tags));
    };

    let on_submit = move |_| {
        let payload = draft.snapshot().payload();
        let slug = ctx.path.with_value(|p| college::slug_from_path(p).to_string());
        let url = ctx.endpoint(&api::college_path(&slug));

        spawn_local(async move {
            log::info!("[MODAL] Submitting review for '{}'", slug);
            let result = api::submit_review(&url, &payload).await;
            match &result {
                Ok(()) => log::info!("[MODAL] Review accepted"),
                Err(e) if e.is_rejected() => log::warn!("[MODAL] Review rejected: {}", e),
                Err(e) => log::error!("[MODAL] Submission error: {}", e),
            }
            browser::alert(submit_message(&result));
            if result.is_ok() {
                close();
                if reload_on_submit {
                    browser::reload_page();
                }
            }
        });
    };

    view! {
        <div
            id="reviewModal"
            class="modal"
            style:display=move || if open.get() { "block" } else { "none" }
            on:click=move |_| close()
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <span class="close" on:click=move |_| close()>"×"</span>
                <h2>"Write a Review"</h2>

                <label for="user">"Name"</label>
                <input
                    id="user"
                    type="text"
                    prop:value=move || user.get()
                    on:input=move |ev| user.set(event_target_value(&ev))
                />

                <label for="text">"Comment"</label>
                <textarea
                    id="text"
                    prop:value=move || text.get()
                    on:input=on_text_input
                ></textarea>

                // Category checkboxes
                <div class="category-checkboxes">
                    {Category::ALL.iter().map(|category| {
                        let category = *category;
                        view! {
                            <label class="category-option">
                                <input
                                    type="checkbox"
                                    name="categories"
                                    value=category.as_str()
                                    prop:checked=move || ratings.with(|r| r.is_checked(category))
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        ratings.update(|r| r.toggle(category, checked));
                                    }
                                />
                                {category.as_str()}
                            </label>
                        }
                    }).collect_view()}
                </div>

                <RatingInputs ratings=ratings />

                <label>"Tags"</label>
                <TagArea tags=tags />
                <CustomTagInput tags=tags />

                <button id="submitReviewBtn" type="button" on:click=on_submit>
                    "Submit Review"
                </button>
            </div>
        </div>
    }
}
