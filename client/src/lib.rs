//! # client
//!
//! Leptos + WASM frontend for the CounterChat ordering kiosk.
//!
//! This crate contains the chat widget: the submission controller around
//! the `/chat` request cycle, the order aggregation state, and the
//! components that render the transcript, order summary, and debug panel.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
