//! Thin helpers over `web-sys` shared by the component bindings.
//!
//! Class and attribute writes are best-effort: a failure is logged at debug
//! level and the widget carries on.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or_else(|| SiteError::MissingElement("window".into()))
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or_else(|| SiteError::MissingElement("document".into()))
}

/// Elements of a `NodeList`, skipping non-element nodes.
#[must_use]
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Attach `handler` for the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, capture: bool, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_bool(event, cb.as_ref().unchecked_ref(), capture)?;
    cb.forget();
    Ok(())
}

/// The element an event was dispatched to, if it is one.
#[must_use]
pub fn event_element(event: &Event) -> Option<Element> {
    let target = event.target()?;
    target.dyn_ref::<Element>().cloned()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        log::debug!("class {class} not updated: {err:?}");
    }
}

pub fn set_classes(el: &Element, classes: &[&str], on: bool) {
    for class in classes {
        set_class(el, class, on);
    }
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::debug!("attribute {name} not updated: {err:?}");
    }
}

/// Whether `query` currently matches the viewport.
#[must_use]
pub fn media_matches(query: &str) -> bool {
    match window().map(|w| w.match_media(query)) {
        Ok(Ok(Some(list))) => list.matches(),
        _ => false,
    }
}
