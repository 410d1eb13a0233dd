//! API Errors
//!
//! Failures of a request to the review server.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("server responded with status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("no browser window available")]
    NoWindow,
}

impl ApiError {
    /// Wrap a rejected promise or failed binding call
    pub fn from_js(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(message)
    }

    /// True when the server was reached but refused the request
    pub fn is_rejected(&self) -> bool {
        matches!(self, ApiError::Status(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Status(500).to_string(), "server responded with status 500");
        assert_eq!(
            ApiError::Network("Failed to fetch".into()).to_string(),
            "network error: Failed to fetch"
        );
    }

    #[test]
    fn test_only_status_is_rejection() {
        assert!(ApiError::Status(404).is_rejected());
        assert!(!ApiError::Network("offline".into()).is_rejected());
        assert!(!ApiError::Decode("bad json".into()).is_rejected());
    }
}
