//! # supplybase-admin
//!
//! Leptos + WASM administrative frontend for the supply catalog: companies,
//! materials, and the supplier-specific names a given supplier uses for a
//! given material.
//!
//! This crate contains pages, components, client-side state, and the REST
//! helpers that talk to the backend API. Browser-only code is gated behind
//! the `hydrate` feature with inert server-side fallbacks.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and logger, then hydrates
/// the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
