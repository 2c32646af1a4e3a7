//! MACD Divergence Dashboard
//!
//! Browser dashboard for the MACD divergence analysis backend, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Live list of stocks flagged with MACD divergence, polled every 2 seconds
//! - Analysis progress while the backend batch job runs
//! - Per-stock chart lookup
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All analysis happens on the backend; the dashboard only polls
//! it over HTTP and renders the results.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
