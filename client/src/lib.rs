//! # lyrn-client
//!
//! Leptos + WASM frontend for the lyrn learning assistant.
//!
//! This crate contains the auth/session state machine, the bearer-token REST
//! client, route guarding, and the page and component tree that renders
//! sessions and chat threads. The `hydrate` feature builds the browser bundle;
//! the `ssr` feature is consumed by the host binary for server rendering.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
