//! Page-level UI chrome state.
//!
//! Keeps transient presentation concerns (boot overlay, device profile) in
//! one context struct so section components can branch on them without
//! re-probing the browser.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shared UI state provided via context as `RwSignal<UiState>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiState {
    /// True once the loading overlay has finished its reveal.
    pub loading_done: bool,
    /// Viewport/user-agent says we are on a phone-sized device.
    pub mobile: bool,
    /// Reduce decorative layer counts and skip desktop-only effects.
    pub low_power: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            loading_done: false,
            mobile: false,
            low_power: false,
        }
    }
}
