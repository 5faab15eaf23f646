//! # site-client
//!
//! Leptos frontend for the agency's marketing and lead-generation site.
//!
//! This crate contains the layout shell, pages, the session state machine
//! with its browser persistence, and the route guard that gates member-only
//! pages. It renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`).

pub mod app;
pub mod components;
pub mod content;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
