//! Device profiling: mobile detection and the low-power heuristic that
//! thins out decorative animation layers.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Viewports narrower than this are treated as phones.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Reported device memory below this (in GB) triggers low-power mode.
pub const LOW_MEMORY_GB: f64 = 4.0;

/// Fewer hardware threads than this triggers low-power mode.
pub const LOW_CORE_COUNT: u32 = 4;

const MOBILE_UA_MARKERS: &[&str] = &[
    "android", "webos", "iphone", "ipad", "ipod", "blackberry", "iemobile", "opera mini",
];

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_MAX_WIDTH
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let lowered = user_agent.to_lowercase();
    MOBILE_UA_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Low-power when the device is a phone, is short on memory, or has few
/// cores. Absent readings (browsers may not expose them) never trigger it.
pub fn is_low_power(mobile: bool, device_memory_gb: Option<f64>, cores: Option<u32>) -> bool {
    if mobile {
        return true;
    }
    if device_memory_gb.is_some_and(|memory| memory < LOW_MEMORY_GB) {
        return true;
    }
    cores.is_some_and(|cores| cores < LOW_CORE_COUNT)
}

/// Probe the browser for the current `(mobile, low_power)` profile.
#[cfg(feature = "csr")]
pub fn detect() -> (bool, bool) {
    let Some(window) = web_sys::window() else {
        return (false, false);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(MOBILE_MAX_WIDTH);
    let navigator = window.navigator();
    let mobile = is_mobile_width(width) || is_mobile_user_agent(&navigator.user_agent().unwrap_or_default());

    // `deviceMemory` has no web-sys binding; read it reflectively like the
    // hardware probes the browser may or may not expose.
    let memory = js_sys::Reflect::get(&navigator, &wasm_bindgen::JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|value| value.as_f64());
    let cores = navigator.hardware_concurrency();
    let cores = if cores > 0.0 { Some(cores as u32) } else { None };

    (mobile, is_low_power(mobile, memory, cores))
}
