//! RateMyCollege Frontend App
//!
//! Picks the surface to render from the page path.

use leptos::prelude::*;

use crate::browser;
use crate::college;
use crate::components::{CollegePage, RecommenderWizard};
use crate::config::AppConfig;
use crate::context::AppContext;

/// True for `/recommender` and anything below it
pub fn is_recommender_path(path: &str) -> bool {
    path == "/recommender" || path.starts_with("/recommender/")
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let path = browser::current_path();
    log::info!("[APP] Mounted at {}", path);

    // Provide context to all children
    provide_context(AppContext::new(config, path.clone()));

    if is_recommender_path(&path) {
        view! { <RecommenderWizard /> }.into_any()
    } else {
        let slug = college::slug_from_path(&path).to_string();
        view! { <CollegePage slug=slug /> }.into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommender_paths() {
        assert!(is_recommender_path("/recommender"));
        assert!(is_recommender_path("/recommender/"));
        assert!(!is_recommender_path("/recommenders"));
        assert!(!is_recommender_path("/colleges/trinity"));
    }
}
