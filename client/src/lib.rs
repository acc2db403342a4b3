//! # client
//!
//! Leptos + WASM frontend for the account portal: login, registration,
//! credential reset, profile viewing/editing and the admin user list.
//!
//! This crate contains pages, components, session state and REST types. The
//! root `portal` package links it with the `ssr` feature to render the shell;
//! the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: attach to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
