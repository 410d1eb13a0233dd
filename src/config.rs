//! Application Configuration
//!
//! Static settings for the frontend. Values can be overridden at build
//! time through `RMC_API_BASE` and `RMC_LOG_LEVEL`.

use log::LevelFilter;

/// Idle time after the last keystroke before tags are requested
pub const DEFAULT_TAG_DEBOUNCE_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
    pub tag_debounce_ms: u32,
    pub log_level: LevelFilter,
    /// Reload the page after a review is accepted
    pub reload_on_submit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            tag_debounce_ms: DEFAULT_TAG_DEBOUNCE_MS,
            log_level: LevelFilter::Info,
            reload_on_submit: true,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with build-time environment values
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("RMC_API_BASE"), option_env!("RMC_LOG_LEVEL"))
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.parse().ok()) {
            config.log_level = level;
        }
        config
    }

    /// Full URL for an API path such as `/generate_tags`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tag_debounce_ms, 1000);
        assert_eq!(config.endpoint("/generate_tags"), "/generate_tags");
        assert!(config.reload_on_submit);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("http://localhost:5000/"), Some("debug"));
        assert_eq!(config.endpoint("/colleges/innis"), "http://localhost:5000/colleges/innis");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_level_keeps_default() {
        let config = AppConfig::from_values(None, Some("loud"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
