#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Citadel web UI: a Yew front-end for browsing the Rick and Morty character
//! catalog behind a demo login.
//!
//! The DOM-free pieces (session model, API error taxonomy, query and view
//! logic, translations) live in plain modules so they compile and test on any
//! target; the Yew components and the gloo-backed transport are gated to
//! wasm32.

pub mod core;
pub mod i18n;
pub mod models;

#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
