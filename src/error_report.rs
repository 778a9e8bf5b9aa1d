//! Page-wide fault reporting.
//!
//! Uncaught script errors and rejected promises are turned into
//! [`ErrorReport`]s, logged, and optionally forwarded as an `error`
//! analytics event. Reporting never fails and never rethrows.

#[cfg(test)]
#[path = "error_report_test.rs"]
mod error_report_test;

use serde_json::{Map, Value};

use crate::analytics::{Analytics, AnalyticsEvent, AnalyticsSink};
use crate::config::ErrorHandlingConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Script,
    UnhandledRejection,
}

impl ErrorKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Script => "JavaScript Error",
            Self::UnhandledRejection => "Unhandled Promise Rejection",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub details: Map<String, Value>,
}

impl ErrorReport {
    /// Report for an uncaught `error` event.
    #[must_use]
    pub fn script(message: &str, filename: &str, lineno: u32, colno: u32, stack: Option<String>) -> Self {
        let mut details = Map::new();
        details.insert("message".into(), message.into());
        details.insert("filename".into(), filename.into());
        details.insert("lineno".into(), lineno.into());
        details.insert("colno".into(), colno.into());
        details.insert("error".into(), stack.map_or(Value::Null, Value::from));
        Self { kind: ErrorKind::Script, details }
    }

    /// Report for an `unhandledrejection` event.
    #[must_use]
    pub fn rejection(reason: &str) -> Self {
        let mut details = Map::new();
        details.insert("reason".into(), reason.into());
        Self { kind: ErrorKind::UnhandledRejection, details }
    }
}

/// What [`ErrorReporter::handle`] did with a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Handled {
    pub logged: bool,
    pub forwarded: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ErrorReporter {
    config: ErrorHandlingConfig,
}

impl ErrorReporter {
    #[must_use]
    pub fn new(config: ErrorHandlingConfig) -> Self {
        Self { config }
    }

    /// Route one report. `analytics` is `None` when tracking is disabled for the page.
    pub fn handle<S: AnalyticsSink>(&self, report: ErrorReport, analytics: Option<&Analytics<S>>) -> Handled {
        let mut handled = Handled::default();

        if self.config.log_to_console {
            log::error!("{}: {}", report.kind.label(), Value::Object(report.details.clone()));
            handled.logged = true;
        }

        if self.config.send_to_analytics {
            if let Some(analytics) = analytics {
                handled.forwarded = analytics.track(&AnalyticsEvent::Error(report));
            }
        }

        handled
    }
}
