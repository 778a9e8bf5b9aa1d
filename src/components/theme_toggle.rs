//! Theme toggle button and the `dark` class on `<html>`.

use web_sys::Element;

use crate::config::ThemeConfig;
use crate::error::SiteError;
use crate::state::theme::{DARK_CLASS, ThemeManager};
use crate::util::storage::LocalStorage;
use crate::util::{dom, icons};

/// Apply the starting theme and, when the button exists, wire toggling.
pub fn mount(root: &Element, button: Option<&Element>, config: &ThemeConfig) -> Result<(), SiteError> {
    let mut store = LocalStorage::open();
    let mut manager = ThemeManager::init(&mut store, config);
    dom::set_class(root, DARK_CLASS, manager.current().is_dark());

    let Some(button) = button else {
        log::debug!("theme toggle button missing; theme fixed at {}", manager.current().as_str());
        return Ok(());
    };

    let root = root.clone();
    dom::listen(button, "click", false, move |_| {
        let theme = manager.toggle(&mut store);
        dom::set_class(&root, DARK_CLASS, theme.is_dark());
        icons::refresh();
    })
}
