//! Analytics setup and interaction tracking.
//!
//! These listeners sit next to the widgets' own handlers on the same
//! elements; each only reads page state, so running order does not matter
//! beyond the theme button, whose handler is registered first.

use std::rc::Rc;

use web_sys::Element;

use crate::analytics::{Analytics, AnalyticsEvent, ContactMethod, GtagSink};
use crate::components::page::PageElements;
use crate::config::{AnalyticsConfig, is_development_host};
use crate::error::SiteError;
use crate::state::nav::section_from_href;
use crate::state::theme::{DARK_CLASS, Theme};
use crate::util::{dom, gtag};

pub type Tracker = Analytics<GtagSink>;

/// Start tracking for the page. Returns `None` when analytics is disabled.
pub fn mount(config: &AnalyticsConfig, page: &PageElements) -> Result<Option<Rc<Tracker>>, SiteError> {
    let window = dom::window()?;
    let location = window.location();
    let hostname = location.hostname()?;

    if !config.is_enabled(&hostname) {
        log::info!("analytics disabled on {hostname:?}");
        return Ok(None);
    }

    match config.measurement_id() {
        Some(id) => {
            if let Err(err) = gtag::install(id) {
                log::warn!("gtag not installed, events will not be delivered: {err}");
            }
        }
        None => log::info!("analytics measurement id not configured"),
    }

    let tracker = Rc::new(Analytics::new(config.events.clone(), GtagSink::new(is_development_host(&hostname))));

    let document = dom::document()?;
    tracker.track(&AnalyticsEvent::PageView { title: document.title(), location: location.href()? });

    if tracker.events().cv_download {
        if let Some(link) = &page.cv_link {
            let tracker = Rc::clone(&tracker);
            dom::listen(link, "click", false, move |_| {
                tracker.track(&AnalyticsEvent::CvDownload);
            })?;
        }
    }

    if tracker.events().contact_click {
        for link in &page.contact_links {
            let method = ContactMethod::from_href(&link.get_attribute("href").unwrap_or_default());
            let tracker = Rc::clone(&tracker);
            dom::listen(link, "click", false, move |_| {
                tracker.track(&AnalyticsEvent::ContactClick(method));
            })?;
        }
    }

    if tracker.events().theme_change {
        if let Some(button) = &page.theme_button {
            let tracker = Rc::clone(&tracker);
            let root = page.root.clone();
            dom::listen(button, "click", false, move |_| {
                let theme = Theme::from_dark(root.class_list().contains(DARK_CLASS));
                tracker.track(&AnalyticsEvent::ThemeChange(theme));
            })?;
        }
    }

    if tracker.events().section_navigation {
        for link in &page.nav_links {
            track_navigation(link, &tracker)?;
        }
    }

    Ok(Some(tracker))
}

fn track_navigation(link: &Element, tracker: &Rc<Tracker>) -> Result<(), SiteError> {
    let section = section_from_href(&link.get_attribute("href").unwrap_or_default()).to_owned();
    let tracker = Rc::clone(tracker);
    dom::listen(link, "click", false, move |_| {
        tracker.track(&AnalyticsEvent::SectionNavigation { section: section.clone() });
    })
}
