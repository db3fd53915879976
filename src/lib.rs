//! # workdesk
//!
//! Leptos + WASM frontend for the Workdesk business-management platform:
//! marketing pages, authenticated client/admin dashboards, and a realtime
//! chat feature backed by an external message broker.
//!
//! This crate contains pages, components, application state, network types,
//! the authenticated HTTP client, and the websocket connection manager that
//! keeps presence and conversation state in sync.

#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
