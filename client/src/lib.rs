//! # vocab-client
//!
//! Leptos + WASM frontend for the vocabulary flashcard trainer.
//!
//! This crate contains the page, components, application state, network
//! types and the session actions that sequence requests against the
//! vocabulary backend. The same crate is compiled with `ssr` into the host
//! server and with `hydrate` into the browser bundle.

pub mod actions;
pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the reactive app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
