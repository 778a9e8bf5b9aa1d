//! Analytics event model and delivery.
//!
//! Events are built as [`AnalyticsEvent`] values, gated on their per-event
//! config switch, and handed to an [`AnalyticsSink`]. Delivery is
//! fire-and-forget: a sink never reports failure back to the caller.
//!
//! TRADE-OFFS
//! ==========
//! Parameters are carried as a `serde_json::Map` so the browser sink can
//! hand them to `gtag` as a plain object without a bespoke conversion per
//! event.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use std::cell::RefCell;

use serde_json::{Map, Value};

use crate::config::AnalyticsEvents;
use crate::error_report::ErrorReport;
use crate::state::theme::Theme;

/// Links counted as CV downloads.
pub const CV_LINK_SELECTOR: &str = r#"a[href*="CV.png"]"#;

/// Links counted as contact clicks.
pub const CONTACT_LINK_SELECTOR: &str = r#"a[href^="mailto:"], a[href*="linkedin.com"]"#;

/// How a visitor reached out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    LinkedIn,
}

impl ContactMethod {
    /// Classify a contact link by its `href`.
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        if href.contains("mailto:") { Self::Email } else { Self::LinkedIn }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::LinkedIn => "linkedin",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AnalyticsEvent {
    PageView { title: String, location: String },
    CvDownload,
    ContactClick(ContactMethod),
    ThemeChange(Theme),
    SectionNavigation { section: String },
    Error(ErrorReport),
}

impl AnalyticsEvent {
    /// GA4 event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::PageView { .. } => "page_view",
            Self::CvDownload => "cv_download",
            Self::ContactClick(_) => "contact_click",
            Self::ThemeChange(_) => "theme_change",
            Self::SectionNavigation { .. } => "section_navigation",
            Self::Error(_) => "error",
        }
    }

    #[must_use]
    pub fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        match self {
            Self::PageView { title, location } => {
                params.insert("page_title".into(), title.clone().into());
                params.insert("page_location".into(), location.clone().into());
            }
            Self::CvDownload => {
                params.insert("method".into(), "direct_link".into());
            }
            Self::ContactClick(method) => {
                params.insert("method".into(), method.as_str().into());
            }
            Self::ThemeChange(theme) => {
                params.insert("theme".into(), theme.as_str().into());
            }
            Self::SectionNavigation { section } => {
                params.insert("section".into(), section.clone().into());
            }
            Self::Error(report) => {
                params.insert("error_type".into(), report.kind.label().into());
                params.extend(report.details.clone());
            }
        }
        params
    }

    /// Whether the config switch for this event is on.
    #[must_use]
    pub fn is_enabled(&self, events: &AnalyticsEvents) -> bool {
        match self {
            Self::PageView { .. } => events.page_view,
            Self::CvDownload => events.cv_download,
            Self::ContactClick(_) => events.contact_click,
            Self::ThemeChange(_) => events.theme_change,
            Self::SectionNavigation { .. } => events.section_navigation,
            Self::Error(_) => events.error_tracking,
        }
    }
}

/// Destination for tracked events.
pub trait AnalyticsSink {
    fn send(&self, name: &str, params: &Map<String, Value>);
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    sent: RefCell<Vec<(String, Map<String, Value>)>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the events sent so far, oldest first.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|(name, _)| name.clone()).collect()
    }

    #[must_use]
    pub fn sent(&self) -> Vec<(String, Map<String, Value>)> {
        self.sent.borrow().clone()
    }
}

impl AnalyticsSink for MemorySink {
    fn send(&self, name: &str, params: &Map<String, Value>) {
        self.sent.borrow_mut().push((name.to_owned(), params.clone()));
    }
}

/// Config-gated event tracker.
#[derive(Debug)]
pub struct Analytics<S> {
    events: AnalyticsEvents,
    sink: S,
}

impl<S: AnalyticsSink> Analytics<S> {
    #[must_use]
    pub fn new(events: AnalyticsEvents, sink: S) -> Self {
        Self { events, sink }
    }

    #[must_use]
    pub fn events(&self) -> &AnalyticsEvents {
        &self.events
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Send `event` if its switch is on. Returns whether it was sent.
    pub fn track(&self, event: &AnalyticsEvent) -> bool {
        if !event.is_enabled(&self.events) {
            return false;
        }
        self.sink.send(event.name(), &event.params());
        true
    }
}

/// Browser sink forwarding to `window.gtag`, when the tag script is loaded.
#[cfg(feature = "browser")]
#[derive(Clone, Debug)]
pub struct GtagSink {
    echo_to_console: bool,
}

#[cfg(feature = "browser")]
impl GtagSink {
    /// `echo_to_console` logs every event, for development hosts.
    #[must_use]
    pub fn new(echo_to_console: bool) -> Self {
        Self { echo_to_console }
    }
}

#[cfg(feature = "browser")]
impl AnalyticsSink for GtagSink {
    fn send(&self, name: &str, params: &Map<String, Value>) {
        if let Err(err) = crate::util::gtag::call("event", &wasm_bindgen::JsValue::from(name), params) {
            log::debug!("gtag event {name} not sent: {err}");
        }
        if self.echo_to_console {
            log::info!("analytics event {name}: {}", Value::Object(params.clone()));
        }
    }
}
