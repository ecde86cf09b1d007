//! Acesso - Login Screen
//!
//! A themed login page with client-side validation and toast
//! notifications, built with Leptos and WebAssembly. The authentication
//! flows behind the controls are presentation stubs.

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
