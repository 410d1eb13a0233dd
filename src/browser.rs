//! Browser Helpers
//!
//! Thin wrappers over `window` calls the UI needs. Failures are logged,
//! never fatal to the page.

/// Path of the current page, e.g. `/colleges/trinity`
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Blocking browser alert
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("[BROWSER] No window for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("[BROWSER] alert failed: {:?}", e);
    }
}

pub fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        log::error!("[BROWSER] reload failed: {:?}", e);
    }
}
