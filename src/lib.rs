//! # auth-session
//!
//! Leptos + WASM auth session client. Tracks the logged-in user, persists the
//! bearer token in `localStorage`, and validates a stored token on startup.
//!
//! This crate contains the reactive auth context, the REST helpers for the
//! login/validate endpoints, token persistence, and the login/home pages.

pub mod app;
pub mod config;
pub mod context;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
