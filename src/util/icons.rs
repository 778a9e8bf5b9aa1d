//! Lucide icon re-rendering.

use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;

use crate::util::dom;

/// Re-render `[data-lucide]` placeholders. Skipped when the icon library is not loaded.
pub fn refresh() {
    let Ok(window) = dom::window() else {
        return;
    };
    let Ok(lucide) = Reflect::get(&window, &"lucide".into()) else {
        return;
    };
    if lucide.is_undefined() || lucide.is_null() {
        return;
    }
    let Ok(create) = Reflect::get(&lucide, &"createIcons".into()) else {
        return;
    };
    if let Some(create) = create.dyn_ref::<Function>() {
        if let Err(err) = create.call0(&lucide) {
            log::debug!("lucide.createIcons failed: {err:?}");
        }
    }
}
