//! Scroll-driven nav link highlighting.
//!
//! An `IntersectionObserver` watching the page sections feeds each batch of
//! entries to a [`NavHighlighter`] and restyles the links it reports. The
//! observer and its callback live for the page session.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::SiteError;
use crate::state::nav::{ACTIVE_CLASSES, NavHighlighter, NavLink, ROOT_MARGIN, THRESHOLD, Visibility};
use crate::util::dom;

fn to_visibility(entry: &IntersectionObserverEntry) -> Visibility {
    Visibility {
        section: entry.target().id(),
        is_intersecting: entry.is_intersecting(),
        ratio: entry.intersection_ratio(),
    }
}

fn restyle(links: &[Element], state: &NavHighlighter) {
    for (index, link) in links.iter().enumerate() {
        dom::set_classes(link, &ACTIVE_CLASSES, state.is_link_active(index));
    }
}

/// Watch `sections` and keep `links` in sync with the one in view.
///
/// A browser without `IntersectionObserver` gets no highlighting.
pub fn mount(links: &[Element], sections: &[Element]) -> Result<(), SiteError> {
    if sections.is_empty() {
        log::debug!("nav highlighter skipped: no sections on page");
        return Ok(());
    }

    let nav_links = links
        .iter()
        .map(|a| NavLink::from_href(&a.get_attribute("href").unwrap_or_default()))
        .collect();
    let mut state = NavHighlighter::new(sections.iter().map(Element::id).collect(), nav_links);
    let links = links.to_vec();

    let callback = Closure::<dyn FnMut(Array, JsValue)>::new(move |entries: Array, _observer: JsValue| {
        let batch: Vec<Visibility> = entries
            .iter()
            .filter_map(|entry| entry.dyn_ref::<IntersectionObserverEntry>().map(to_visibility))
            .collect();
        if let Some(change) = state.observe(&batch) {
            log::debug!("active section: {} ({} links)", change.section, change.marked.len());
            restyle(&links, &state);
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(THRESHOLD));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("IntersectionObserver unavailable, nav highlighting disabled: {err:?}");
            return Ok(());
        }
    };
    for section in sections {
        observer.observe(section);
    }
    callback.forget();
    Ok(())
}
