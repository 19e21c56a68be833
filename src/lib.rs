//! # attendance-client
//!
//! Leptos + WASM frontend for the face-attendance system. Replaces the
//! React client with a Rust-native UI layer: login, role-gated student and
//! admin dashboards, and the session lifecycle (token persistence, startup
//! profile check, route guard) that connects them.
//!
//! The face-recognition backend is an external REST collaborator; this
//! crate only consumes its HTTP contract via `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
