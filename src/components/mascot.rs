//! Mascot bubble taps on narrow viewports.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use crate::error::SiteError;
use crate::state::mascot::{BUBBLE_CLASS, MOBILE_QUERY, Mascot};
use crate::util::dom;

pub fn mount(mascot: &Element, document: &Document) -> Result<(), SiteError> {
    let state = Rc::new(RefCell::new(Mascot::default()));

    {
        let state = Rc::clone(&state);
        let el = mascot.clone();
        dom::listen(mascot, "click", false, move |_| {
            let mut state = state.borrow_mut();
            if state.tap(dom::media_matches(MOBILE_QUERY)) {
                dom::set_class(&el, BUBBLE_CLASS, state.bubble_visible());
            }
        })?;
    }

    let el = mascot.clone();
    dom::listen(document, "click", true, move |event| {
        let inside = event
            .target()
            .is_some_and(|target| target.dyn_ref::<Node>().is_some_and(|node| el.contains(Some(node))));
        let mut state = state.borrow_mut();
        if state.tap_page(dom::media_matches(MOBILE_QUERY), inside) {
            dom::set_class(&el, BUBBLE_CLASS, false);
        }
    })
}
