//! UI Components
//!
//! Reusable Leptos components.

mod college_page;
mod rating_inputs;
mod recommender;
mod review_modal;
mod tag_area;
mod wizard_steps;

pub use college_page::CollegePage;
pub use rating_inputs::RatingInputs;
pub use recommender::{RecommenderWizard, Section};
pub use review_modal::ReviewModal;
pub use tag_area::{CustomTagInput, TagArea};
