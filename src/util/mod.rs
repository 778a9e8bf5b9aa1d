//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, DOM plumbing, the
//! third-party tag and icon scripts) from component state.

#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod gtag;
#[cfg(feature = "browser")]
pub mod icons;
pub mod storage;
