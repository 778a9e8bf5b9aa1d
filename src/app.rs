//! Composition root.
//!
//! Waits for the document to be parsed, loads the config once, resolves
//! page elements once, and mounts each widget. Widgets are mounted
//! independently: one failing to initialize is logged and the rest still
//! come up.

use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::components::page::PageElements;
use crate::components::{accordion, analytics, error_handler, mascot, mobile_nav, nav_highlighter, theme_toggle};
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::error_report::ErrorReporter;
use crate::util::{dom, icons};

/// Run setup now, or on `DOMContentLoaded` while the document is still loading.
pub fn start() -> Result<(), SiteError> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", false, |_| setup())
    } else {
        setup();
        Ok(())
    }
}

fn setup() {
    let config = SiteConfig::load();
    if let Err(err) = mount_all(&config) {
        log::error!("error initializing page: {err}");
    }
}

fn report(component: &str, result: Result<(), SiteError>) {
    match result {
        Ok(()) => log::debug!("{component} ready"),
        Err(err) => log::error!("{component} failed to initialize: {err}"),
    }
}

fn mount_all(config: &SiteConfig) -> Result<(), SiteError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let page = PageElements::resolve(&document)?;

    report("theme", theme_toggle::mount(&page.root, page.theme_button.as_ref(), &config.theme));

    let tracker = match analytics::mount(&config.analytics, &page) {
        Ok(tracker) => tracker,
        Err(err) => {
            log::error!("analytics failed to initialize: {err}");
            None
        }
    };
    report("error handler", error_handler::mount(ErrorReporter::new(config.error_handling.clone()), tracker));

    if config.features.mobile_menu {
        if let (Some(button), Some(menu)) = (&page.mobile_button, &page.mobile_menu) {
            report("mobile menu", mobile_nav::mount(button, menu, &page.mobile_nav_links));
        }
    }

    if config.features.intersection_observer {
        report("nav highlighter", nav_highlighter::mount(&page.nav_links, &page.sections));
    }

    if config.features.tiger_mascot {
        if let Some(el) = &page.mascot {
            report("mascot", mascot::mount(el, &document));
        }
    }

    if config.features.accordion_details {
        for root in &page.accordion_roots {
            report("accordion", accordion::mount(root, &document));
        }
    }

    icons::refresh();
    set_year(&page);
    report("hash navigation", reset_hash_navigation(&window));
    Ok(())
}

fn set_year(page: &PageElements) {
    if let Some(year) = &page.year {
        year.set_text_content(Some(&js_sys::Date::new_0().get_full_year().to_string()));
    }
}

/// Drop a fragment from the initial URL and start at the top of the page.
fn reset_hash_navigation(window: &Window) -> Result<(), SiteError> {
    let location = window.location();
    if location.hash()?.is_empty() {
        return Ok(());
    }
    let url = format!("{}{}", location.pathname()?, location.search()?);
    window.history()?.replace_state_with_url(&JsValue::NULL, "", Some(&url))?;
    window.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}
