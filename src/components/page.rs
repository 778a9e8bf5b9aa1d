//! One-time element lookup for the whole page.
//!
//! Every component receives handles from [`PageElements`] instead of querying
//! the document itself. An absent element is `None` or an empty list, and
//! the component that needs it stays inert.

use web_sys::{Document, Element};

use crate::analytics::{CONTACT_LINK_SELECTOR, CV_LINK_SELECTOR};
use crate::components::accordion::ACCORDION_GROUPS;
use crate::error::SiteError;
use crate::state::nav::WATCHED_SECTIONS;
use crate::util::dom;

pub const NAV_LINK_SELECTOR: &str = "a[data-nav]";
pub const MOBILE_NAV_LINK_SELECTOR: &str = "#mobileMenu a[data-nav]";

#[derive(Clone, Debug)]
pub struct PageElements {
    /// The `<html>` element.
    pub root: Element,
    pub theme_button: Option<Element>,
    pub mobile_button: Option<Element>,
    pub mobile_menu: Option<Element>,
    /// Every nav link, desktop and mobile, in document order.
    pub nav_links: Vec<Element>,
    pub mobile_nav_links: Vec<Element>,
    /// Watched sections present on the page, in document order.
    pub sections: Vec<Element>,
    /// Accordion group roots present on the page.
    pub accordion_roots: Vec<Element>,
    pub mascot: Option<Element>,
    pub year: Option<Element>,
    pub cv_link: Option<Element>,
    pub contact_links: Vec<Element>,
}

impl PageElements {
    pub fn resolve(document: &Document) -> Result<Self, SiteError> {
        let root = document
            .document_element()
            .ok_or_else(|| SiteError::MissingElement("html".into()))?;
        let by_id = |id: &str| document.get_element_by_id(id);

        Ok(Self {
            root,
            theme_button: by_id("themeToggle"),
            mobile_button: by_id("mobileToggle"),
            mobile_menu: by_id("mobileMenu"),
            nav_links: dom::elements(&document.query_selector_all(NAV_LINK_SELECTOR)?),
            mobile_nav_links: dom::elements(&document.query_selector_all(MOBILE_NAV_LINK_SELECTOR)?),
            sections: WATCHED_SECTIONS.iter().filter_map(|&id| by_id(id)).collect(),
            accordion_roots: ACCORDION_GROUPS.iter().filter_map(|&id| by_id(id)).collect(),
            mascot: document.query_selector(".tiger-wrapper")?,
            year: by_id("year"),
            cv_link: document.query_selector(CV_LINK_SELECTOR)?,
            contact_links: dom::elements(&document.query_selector_all(CONTACT_LINK_SELECTOR)?),
        })
    }
}
