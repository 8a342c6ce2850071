//! # catalog
//!
//! Leptos + WASM single-page product catalog editor.
//!
//! The product list lives in the browser's `localStorage` under one key and
//! is edited through a reusable create/edit modal and a delete confirmation
//! dialog. Domain logic (`controller`, `store`, `state`) is plain Rust and
//! builds natively for tests; browser glue is behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger already set: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
