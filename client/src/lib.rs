//! # monmatos-ui
//!
//! Leptos frontend for MonMatos, the tent inventory of scout groups.
//!
//! This crate contains pages, components, application state and the REST
//! client. It is compiled twice: with `ssr` inside the server binary and with
//! `hydrate` to WASM for the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
