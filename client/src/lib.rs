//! # launchpad-client
//!
//! Leptos + WASM frontend for the Filecoin Strategy Launchpad.
//!
//! Two page variants share one root shell: the scroll-driven landing page at
//! `/` and the OS-styled terminal dashboard at `/os`. All content is static;
//! the only state is scroll progress, the active section, and a ticking
//! clock. The `ssr` feature builds the crate for server rendering, and
//! `hydrate` builds the browser bundle entry point below.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("launchpad: hydrating");
    leptos::mount::hydrate_body(app::App);
}
