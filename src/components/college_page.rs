//! College Page Component
//!
//! Profile page shell for one college, hosting the review modal.

use leptos::prelude::*;

use crate::college;
use crate::components::ReviewModal;

#[component]
pub fn CollegePage(#[prop(into)] slug: String) -> impl IntoView {
    let (open, set_open) = signal(false);
    let name = college::display_name(&slug);

    view! {
        <main class="college-page">
            <h1>{name}</h1>
            <button id="openModalBtn" on:click=move |_| set_open.set(true)>
                "Write a Review"
            </button>
            <ReviewModal open=open set_open=set_open />
        </main>
    }
}
