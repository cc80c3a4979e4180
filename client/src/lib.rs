//! # client
//!
//! Leptos frontend for the admin dashboard: a user table and a job table
//! behind a collapsible navigation panel.
//!
//! Compiled with `ssr` for the Axum host and with `hydrate` for the browser
//! WASM bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the reactive runtime to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::logging::log!("hydrating dashboard");
    leptos::mount::hydrate_body(app::App);
}
