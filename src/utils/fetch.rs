//! JSON over the Fetch API.
//!
//! Every request is raced against a timer. Catalog GETs can go through the
//! session cache.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::utils::{cache, log};

/// Await `promise`, giving up after `timeout_ms`.
///
/// The timer promise resolves to `undefined`; a fetch never does, so an
/// undefined winner means the timer fired first.
pub async fn with_timeout(promise: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let timer = Promise::new(&mut |resolve, _reject| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::of2(&promise, &timer);
    let winner = JsFuture::from(Promise::race(&contenders))
        .await
        .map_err(|e| FetchError::NetworkError(e.as_string().unwrap_or_else(|| format!("{:?}", e))))?;

    if winner.is_undefined() {
        Err(FetchError::Timeout)
    } else {
        Ok(winner)
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let text = send(&request).await?;
    parse_json(url, &text)
}

/// Fetch and parse JSON with sessionStorage caching.
///
/// Tries the session cache first; on a miss, fetches from network and
/// stores the result for the rest of the session.
pub async fn fetch_json_cached<T>(url: &str, cache_key: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned + Serialize,
{
    if let Some(cached) = cache::get::<T>(cache_key) {
        return Ok(cached);
    }

    let data = fetch_json::<T>(url).await?;

    // Caching is best-effort.
    if let Err(e) = cache::set(cache_key, &data) {
        log::warn(&format!("cache write for {} failed: {}", cache_key, e));
    }

    Ok(data)
}

/// POST a JSON body and parse the JSON response.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, FetchError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let json = serde_json::to_string(body).map_err(|e| FetchError::BodyEncodeFailed(e.to_string()))?;

    let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&json));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let text = send(&request).await?;
    parse_json(url, &text)
}

fn parse_json<T: DeserializeOwned>(url: &str, text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|e| {
        log::error(&format!("unexpected payload from {}: {}", url, e));
        FetchError::JsonParseError(e.to_string())
    })
}

/// Send a request with the Fetch API and read the body as text.
///
/// A request slower than `FETCH_TIMEOUT_MS` yields `FetchError::Timeout`.
async fn send(request: &Request) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let response: Response = with_timeout(window.fetch_with_request(request), FETCH_TIMEOUT_MS)
        .await?
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}
