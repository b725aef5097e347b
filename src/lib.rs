//! # staffboard
//!
//! Leptos + WASM frontend for the employee/HR management dashboard.
//!
//! This crate contains pages, components, application state, and the
//! authenticated network layer. The session core (token store, transport
//! client, session service, session state machine, route guard) is the
//! load-bearing part; the HR feature pages render static placeholder
//! content on top of it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point — hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
