//! Browser glue: DOM handles, timers, `localStorage` and the `fetch` transport.

use async_trait::async_trait;
use budtender_core::{HttpRequest, HttpResponse, KeyValueStore, Transport, TransportError};
use js_sys::{Function, Promise};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Headers, Request, RequestInit, RequestMode, Response, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
///
/// # Panics
/// Panics if no browser `window` is available.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Backoff sleep handed to `retry_async`; a timer failure only shortens the wait.
#[allow(clippy::future_not_send)]
pub async fn pause(delay: Duration) {
    let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    if let Err(err) = sleep_ms(ms).await {
        log::warn!("timer failed: {}", js_error_message(&err));
    }
}

/// Calendar year on the user's clock.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use chrono::Datelike;
        chrono::Utc::now().year()
    }
}

/// Leave the application for an external page.
pub fn redirect_external(url: &str) {
    if let Err(err) = window().location().set_href(url) {
        log::error!("redirect to {url} failed: {}", js_error_message(&err));
    }
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// [`KeyValueStore`] over `localStorage`. Outside the browser every read misses
/// and writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<Storage> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()
                .map_err(|err| log::warn!("storage unavailable: {}", js_error_message(&err)))
                .ok()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage()
            && let Err(err) = storage.set_item(key, value)
        {
            log::warn!("could not persist {key}: {}", js_error_message(&err));
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// [`Transport`] backed by `window.fetch`, sending JSON to `base`.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    base: String,
}

impl FetchTransport {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new(crate::paths::api_base())
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url(&self.base);
        log::debug!("{} {}", request.method.as_str(), request.path);
        fetch(&url, &request)
            .await
            .map_err(|err| TransportError::new(js_error_message(&err)))
    }
}

#[allow(clippy::future_not_send)]
async fn fetch(url: &str, request: &HttpRequest) -> Result<HttpResponse, JsValue> {
    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    init.set_mode(RequestMode::Cors);

    let headers = Headers::new()?;
    headers.set("Accept", "application/json")?;
    if let Some(body) = &request.body {
        headers.set("Content-Type", "application/json")?;
        init.set_body(&JsValue::from_str(&body.to_string()));
    }
    if let Some(token) = &request.bearer {
        headers.set("Authorization", &format!("Bearer {token}"))?;
    }
    init.set_headers(&headers);

    let req = Request::new_with_str_and_init(url, &init)?;
    let response: Response = JsFuture::from(window().fetch_with_request(&req))
        .await?
        .dyn_into()?;
    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok(HttpResponse::new(response.status(), body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_storage_is_inert_off_the_web() {
        let storage = BrowserStorage;
        storage.set("budtender.user_id", "7");
        assert_eq!(storage.get("budtender.user_id"), None);
        storage.remove("budtender.user_id");
    }

    #[test]
    fn fetch_transport_defaults_to_configured_base() {
        assert_eq!(FetchTransport::default().base(), crate::paths::api_base());
        assert_eq!(FetchTransport::new("http://api").base(), "http://api");
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
