//! Mobile menu button and panel.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use crate::error::SiteError;
use crate::state::mobile_nav::{HIDDEN_CLASS, MobileMenu};
use crate::util::{dom, icons};

pub fn mount(button: &Element, menu: &Element, links: &[Element]) -> Result<(), SiteError> {
    let state = Rc::new(RefCell::new(MobileMenu::from_hidden(menu.class_list().contains(HIDDEN_CLASS))));

    {
        let state = Rc::clone(&state);
        let button_el = button.clone();
        let menu = menu.clone();
        dom::listen(button, "click", false, move |_| {
            let icon = state.borrow_mut().toggle();
            dom::set_class(&menu, HIDDEN_CLASS, !state.borrow().is_open());
            if let Ok(Some(placeholder)) = button_el.query_selector("[data-lucide]") {
                dom::set_attr(&placeholder, "data-lucide", icon.lucide_name());
            }
            icons::refresh();
        })?;
    }

    // Following a link closes the menu.
    for link in links {
        let state = Rc::clone(&state);
        let menu = menu.clone();
        dom::listen(link, "click", false, move |_| {
            state.borrow_mut().close();
            dom::set_class(&menu, HIDDEN_CLASS, true);
        })?;
    }
    Ok(())
}
