//! Browser binding to the EmailJS SDK.
//!
//! The SDK is loaded by a CDN `<script>` tag in `index.html` and announces
//! itself as a global `emailjs` object on `window`. Script-load completion
//! is not observable synchronously, which is why `EmailClient::is_ready`
//! exists at all: the submission flow polls it with a bounded wait before
//! touching `send`.

use std::time::Duration;

use wasm_bindgen::{JsCast, JsValue};

use super::email::{Delay, EmailClient, SendError, SendRequest};
use crate::config;

const GLOBAL_NAME: &str = "emailjs";

/// `EmailClient` over the script-injected `window.emailjs` global.
pub struct EmailJsClient;

impl EmailJsClient {
    fn global() -> Option<JsValue> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_NAME)).ok()?;
        if value.is_undefined() || value.is_null() {
            None
        } else {
            Some(value)
        }
    }
}

impl EmailClient for EmailJsClient {
    fn is_ready(&self) -> bool {
        Self::global().is_some()
    }

    async fn send(&self, request: &SendRequest) -> Result<(), SendError> {
        let emailjs = Self::global().ok_or(SendError::Unavailable)?;
        let send_fn = js_sys::Reflect::get(&emailjs, &JsValue::from_str("send"))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
            .ok_or(SendError::Unavailable)?;

        let params = template_params(request)?;
        let args = js_sys::Array::of4(
            &JsValue::from_str(config::EMAILJS_SERVICE_ID),
            &JsValue::from_str(config::EMAILJS_TEMPLATE_ID),
            &params,
            &JsValue::from_str(config::EMAILJS_PUBLIC_KEY),
        );
        let promise = js_sys::Reflect::apply(&send_fn, &emailjs, &args)
            .map_err(|error| send_error_from_js(&error))?;
        let promise: js_sys::Promise = promise
            .dyn_into()
            .map_err(|error| send_error_from_js(&error))?;

        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_ack) => Ok(()),
            Err(error) => Err(send_error_from_js(&error)),
        }
    }
}

/// Serialize the payload to a plain JS object via its JSON form.
fn template_params(request: &SendRequest) -> Result<JsValue, SendError> {
    let json = serde_json::to_string(request).map_err(|error| SendError::Rejected {
        text: Some(error.to_string()),
        status: None,
    })?;
    js_sys::JSON::parse(&json).map_err(|error| send_error_from_js(&error))
}

/// Map a thrown JS value into `SendError`, keeping the provider's `text`
/// and `status` fields when present.
fn send_error_from_js(value: &JsValue) -> SendError {
    let text = js_sys::Reflect::get(value, &JsValue::from_str("text"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| value.as_string());
    let status = js_sys::Reflect::get(value, &JsValue::from_str("status"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|status| status as u16);
    SendError::Rejected { text, status }
}

/// `Delay` backed by real browser timers.
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
