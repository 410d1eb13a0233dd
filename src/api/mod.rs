//! HTTP API Wrappers
//!
//! Frontend bindings to the review server, organized by domain.

mod error;
mod reviews;
mod tags;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Re-export all public items
pub use error::ApiError;
pub use reviews::*;
pub use tags::*;

/// POST `body` as JSON and return the response if its status is OK
async fn post_json<T: Serialize + ?Sized>(url: &str, body: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::from_js)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(ApiError::from_js)?;

    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    log::debug!("[API] POST {}", url);
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::from_js)?;
    let response: Response = value.dyn_into().map_err(ApiError::from_js)?;

    if !response.ok() {
        log::warn!("[API] POST {} -> {}", url, response.status());
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

/// Decode a JSON response body
async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    let promise = response.json().map_err(ApiError::from_js)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::from_js)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
