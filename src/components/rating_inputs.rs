//! Rating Inputs Component
//!
//! One numeric 1-10 input per checked category, in checkbox order.

use leptos::prelude::*;

use crate::review::RatingBlock;

/// Inputs are keyed by the block generation, so every checkbox change
/// remounts them empty and typing never re-renders them.
#[component]
pub fn RatingInputs(ratings: RwSignal<RatingBlock>) -> impl IntoView {
    view! {
        <div id="ratingInputs" class="rating-inputs">
            <For
                each=move || ratings.with(|r| r.fields())
                key=|field| *field
                children=move |field| {
                    let category = field.category;
                    view! {
                        <label>{category.rating_label()}</label>
                        <input
                            type="number"
                            name=category.as_str()
                            min="1"
                            max="10"
                            required=true
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ratings.update(|r| r.set_raw(category, value));
                            }
                        />
                        <br/>
                    }
                }
            />
        </div>
    }
}
