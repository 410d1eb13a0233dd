//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Frontend settings
    config: StoredValue<AppConfig>,
    /// Path of the page the app was mounted on
    pub path: StoredValue<String>,
}

impl AppContext {
    pub fn new(config: AppConfig, path: String) -> Self {
        Self {
            config: StoredValue::new(config),
            path: StoredValue::new(path),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn endpoint(&self, path: &str) -> String {
        self.config.with_value(|c| c.endpoint(path))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
