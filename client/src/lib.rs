//! # client
//!
//! Leptos + WASM frontend for the BlueMint offline-escrow wallet demo.
//! Replaces the hand-written JS wallet and merchant pages with a Rust-native
//! UI layer while keeping their behavior screen-for-screen.
//!
//! This crate contains pages, components, application state, and the REST
//! layer that talks to the external BlueMint services (auth, escrow,
//! gateway, settlement ledger, transactions). There is no backend code here;
//! every screen is a thin view over those services.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
