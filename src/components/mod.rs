//! Browser bindings for each page widget.
//!
//! ARCHITECTURE
//! ============
//! Every `mount` takes element handles resolved once by [`page::PageElements`]
//! and the relevant slice of config, wires listeners for the page lifetime,
//! and mirrors the matching `state` machine onto the DOM.

pub mod accordion;
pub mod analytics;
pub mod error_handler;
pub mod mascot;
pub mod mobile_nav;
pub mod nav_highlighter;
pub mod page;
pub mod theme_toggle;
