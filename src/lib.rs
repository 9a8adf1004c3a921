//! # portfolio
//!
//! Leptos + WASM single-page portfolio site. Fully client-rendered: Trunk
//! builds the browser bundle with the `csr` feature, and the default
//! (featureless) build compiles the same component tree natively so the
//! pure logic underneath it stays testable with plain `cargo test`.
//!
//! The one real piece of machinery is the contact form in `net::email` —
//! everything else is presentational.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point. Trunk invokes this after the WASM module loads.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
