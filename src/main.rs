//! EventHub Web Client
//!
//! Dashboard and profile screens for the EventHub event registration
//! service, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the EventHub REST API over HTTP using the bearer
//! token left in local storage by the sign-in flow.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod error;
mod format;
mod logging;
mod pages;
mod routes;
mod state;

fn main() {
    // Console logging and panic hook
    logging::init();

    mount_to_body(|| view! { <app::App /> });
}
