//! SILVESS Dashboard
//!
//! Restaurant admin dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Ingredient stock with low-stock badges and entry/exit movements
//! - Recipe cards with cost and margin
//! - Physical inventory runs with count, close and reopen
//! - Daily menus, table QR codes, sales and reports
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All backend calls go through the `silvess` API client with a
//! `fetch` transport and a `localStorage` session.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = api::load_config();
    if let Err(e) = logging::init(&config.logging) {
        web_sys::console::error_1(&format!("Logging disabled: {}", e).into());
    }

    let ctx = api::AppContext::build(config);
    let restored = ctx.client.session().init();
    tracing::info!(
        api = %ctx.client.base_url(),
        authenticated = restored.is_some(),
        "SILVESS dashboard starting"
    );

    mount_to_body(move || view! { <app::App ctx=ctx /> });
}
