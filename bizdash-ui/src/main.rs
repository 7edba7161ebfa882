//! BizDash Dashboard
//!
//! Single-page business dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Sales, revenue and expense metric cards
//! - Monthly bar chart and revenue-by-category pie chart
//! - Light/dark theme persisted in `localStorage`
//! - Tab navigation mirrored in the URL fragment
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in the `bizdash` core's `Dashboard`
//! controller; this crate supplies the browser store and history and renders
//! the component tree.

use leptos::*;

mod app;
mod components;
mod history;
mod pages;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
