//! SPA Shell - server-rendered single-page app with fragment routing
//!
//! A Leptos application served by axum: a hash-based router picks one of a
//! few pages, and a demo page probes a backend ping endpoint.

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
