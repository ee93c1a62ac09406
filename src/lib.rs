//! # planova
//!
//! Leptos + WASM front end for the Planova fitness and nutrition service.
//!
//! This crate contains the authenticated API access layer (request executor,
//! credential storage, session store), the route guard and premium gate, and
//! the pages built on them. Browser-only pieces sit behind the `hydrate`
//! feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
