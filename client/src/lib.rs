//! # nobleguard-client
//!
//! Leptos + WASM frontend for the NobleGuard prompt-security service.
//!
//! This crate contains the chat and dashboard pages, their components, the
//! per-page state models, and the REST helpers that talk to the detection
//! backend. It compiles to WASM for the browser (`hydrate`) and natively for
//! server rendering (`ssr`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/console logging and hydrates `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
