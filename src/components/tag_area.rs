//! Tag Area Component
//!
//! Suggested and manually added tags as removable chips, plus the
//! custom tag field.

use leptos::prelude::*;

use crate::review::TagChips;

/// Chip list; shows a placeholder while suggestions load
#[component]
pub fn TagArea(tags: RwSignal<TagChips>) -> impl IntoView {
    view! {
        <div id="tagContainer" class="tag-container">
            <Show when=move || tags.with(|t| t.is_loading())>
                <em>"Loading tags..."</em>
            </Show>
            <For
                each=move || tags.with(|t| t.chips().to_vec())
                key=|chip| chip.id
                children=move |chip| {
                    let id = chip.id;
                    view! {
                        <span
                            class="tag"
                            title="Click to remove"
                            on:click=move |_| tags.update(|t| t.remove(id))
                        >
                            {chip.display()}
                        </span>
                    }
                }
            />
        </div>
    }
}

/// Text field that appends a chip on Enter
#[component]
pub fn CustomTagInput(tags: RwSignal<TagChips>) -> impl IntoView {
    let (value, set_value) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let input = value.get_untracked();
        let mut added = false;
        tags.update(|t| added = t.add_custom(&input));
        if added {
            set_value.set(String::new());
        }
    };

    view! {
        <input
            id="customTagInput"
            type="text"
            placeholder="Add a tag and press Enter"
            autocomplete="off"
            prop:value=move || value.get()
            on:input=move |ev| set_value.set(event_target_value(&ev))
            on:keydown=on_keydown
        />
    }
}
