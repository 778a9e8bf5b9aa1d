//! Navigation highlighter state machine.
//!
//! Tracks which page section currently sits in the active band of the
//! viewport and which nav links point at it. One section may have zero, one
//! or many links (desktop and mobile variants); they are marked together.
//!
//! DESIGN
//! ======
//! A notification batch is resolved to a single winner before anything is
//! marked: the entering section with the greatest intersection ratio, ties
//! broken by document order. Sections leaving the band never clear the
//! active state on their own.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::cmp::Ordering;
use std::collections::HashMap;

/// Section ids watched for highlighting, in document order.
pub const WATCHED_SECTIONS: [&str; 4] = ["hero", "about", "projects", "contact"];

/// Observer root margin: a band covering roughly the middle 15% of the viewport.
pub const ROOT_MARGIN: &str = "-30% 0px -55% 0px";

/// Minimum intersection ratio for a section to count as visible.
pub const THRESHOLD: f64 = 0.01;

/// Classes applied to active nav links.
pub const ACTIVE_CLASSES: [&str; 4] = ["bg-brand-50", "dark:bg-slate-800", "text-brand-700", "dark:text-brand-300"];

/// Section id targeted by an `href` such as `#about`.
#[must_use]
pub fn section_from_href(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// A nav link and the section it points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub section: String,
}

impl NavLink {
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        Self { section: section_from_href(href).to_owned() }
    }
}

/// One visibility-change notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Visibility {
    pub section: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Visibility {
    #[must_use]
    pub fn entering(section: impl Into<String>, ratio: f64) -> Self {
        Self { section: section.into(), is_intersecting: true, ratio }
    }

    #[must_use]
    pub fn leaving(section: impl Into<String>) -> Self {
        Self { section: section.into(), is_intersecting: false, ratio: 0.0 }
    }
}

/// Result of activating a section: every link is cleared, then `marked` is styled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveLinks {
    pub section: String,
    pub marked: Vec<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct NavHighlighter {
    sections: Vec<String>,
    links: Vec<NavLink>,
    by_section: HashMap<String, Vec<usize>>,
    active: Option<String>,
}

impl NavHighlighter {
    /// Build the section-to-links map. Link indices follow `links` order.
    #[must_use]
    pub fn new(sections: Vec<String>, links: Vec<NavLink>) -> Self {
        let mut by_section: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, link) in links.iter().enumerate() {
            by_section.entry(link.section.clone()).or_default().push(index);
        }
        Self { sections, links, by_section, active: None }
    }

    /// Indices of links pointing at `section`.
    #[must_use]
    pub fn links_for(&self, section: &str) -> &[usize] {
        self.by_section.get(section).map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn is_link_active(&self, index: usize) -> bool {
        self.links.get(index).is_some_and(|link| self.active.as_deref() == Some(link.section.as_str()))
    }

    /// Make `section` the active one.
    pub fn set_active(&mut self, section: &str) -> ActiveLinks {
        self.active = Some(section.to_owned());
        ActiveLinks { section: section.to_owned(), marked: self.links_for(section).to_vec() }
    }

    /// Apply one notification batch. Returns `None` when no section entered the band.
    pub fn observe(&mut self, batch: &[Visibility]) -> Option<ActiveLinks> {
        let winner = self.pick_winner(batch)?.section.clone();
        Some(self.set_active(&winner))
    }

    fn document_order(&self, section: &str) -> usize {
        self.sections.iter().position(|s| s == section).unwrap_or(usize::MAX)
    }

    fn pick_winner<'a>(&self, batch: &'a [Visibility]) -> Option<&'a Visibility> {
        let mut best: Option<(&Visibility, usize)> = None;
        for entry in batch.iter().filter(|e| e.is_intersecting) {
            let order = self.document_order(&entry.section);
            let better = match best {
                None => true,
                Some((current, current_order)) => match entry.ratio.total_cmp(&current.ratio) {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => order < current_order,
                },
            };
            if better {
                best = Some((entry, order));
            }
        }
        best.map(|(entry, _)| entry)
    }
}
