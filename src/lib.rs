//! Behavior layer for a static resume page.
//!
//! This crate is compiled to WebAssembly and attached to server-rendered
//! markup. It owns theme switching, the mobile menu, scroll-driven nav
//! highlighting, the experience/projects accordions, the mascot bubble,
//! analytics events and page-wide error reporting.
//!
//! Widget logic lives in plain state machines under [`state`] that build and
//! test natively. Everything touching the DOM is behind the `browser` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Accordion, nav highlighter, theme, mobile menu and mascot state |
//! | [`analytics`] | Event model, per-event gating, sinks |
//! | [`error_report`] | Fault reports and their routing |
//! | [`config`] | Page configuration with safe defaults |
//! | [`error`] | Setup error type |
//! | [`util`] | Storage seam and browser helpers |
//! | `components` | DOM bindings per widget (`browser` only) |
//! | `app` | Composition root (`browser` only) |

pub mod analytics;
#[cfg(feature = "browser")]
pub mod app;
#[cfg(feature = "browser")]
pub mod components;
pub mod config;
pub mod error;
pub mod error_report;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("console logger not installed: {err}");
    }

    if let Err(err) = app::start() {
        log::error!("page behavior not started: {err}");
    }
}
