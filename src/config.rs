//! Site configuration.
//!
//! DESIGN
//! ======
//! One [`SiteConfig`] value is built at startup and handed to each component
//! by reference. Every key is optional: a partial or missing config falls
//! back to the defaults below instead of failing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

/// GA4 measurement id shipped in the page template before a real one is set.
pub const PLACEHOLDER_MEASUREMENT_ID: &str = "G-XXXXXXXXXX";

/// Hostnames treated as local development.
const DEVELOPMENT_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", ""];

/// Whether `hostname` is a local development host.
#[must_use]
pub fn is_development_host(hostname: &str) -> bool {
    DEVELOPMENT_HOSTS.contains(&hostname)
}

/// Top-level page configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub analytics: AnalyticsConfig,
    pub error_handling: ErrorHandlingConfig,
    pub features: FeatureFlags,
}

impl SiteConfig {
    /// Parse a config from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when `raw` is not valid JSON or a key
    /// has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read `window.CONFIG`, falling back to defaults when it is absent or
    /// malformed.
    #[must_use]
    pub fn load() -> Self {
        #[cfg(feature = "browser")]
        {
            match read_window_config() {
                Ok(Some(raw)) => Self::from_json(&raw).unwrap_or_else(|err| {
                    log::warn!("ignoring window.CONFIG: {err}");
                    Self::default()
                }),
                Ok(None) => {
                    log::debug!("window.CONFIG not set; using defaults");
                    Self::default()
                }
                Err(err) => {
                    log::warn!("could not read window.CONFIG: {err}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "browser")]
fn read_window_config() -> Result<Option<String>, SiteError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &"CONFIG".into())?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    Ok(js_sys::JSON::stringify(&value)?.as_string())
}

/// Theme defaults and persistence.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Start in dark mode when nothing is persisted.
    pub default_dark: bool,
    /// Persist the resolved theme on first load.
    pub persist_in_local_storage: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { default_dark: true, persist_in_local_storage: true }
    }
}

/// Analytics wiring.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsConfig {
    /// Explicit switch. When unset, analytics runs everywhere except
    /// development hosts.
    pub enabled: Option<bool>,
    pub ga4_measurement_id: String,
    pub events: AnalyticsEvents,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: None,
            ga4_measurement_id: PLACEHOLDER_MEASUREMENT_ID.to_owned(),
            events: AnalyticsEvents::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Resolve the enabled flag for the page served from `hostname`.
    #[must_use]
    pub fn is_enabled(&self, hostname: &str) -> bool {
        self.enabled.unwrap_or_else(|| !is_development_host(hostname))
    }

    /// The measurement id, unless it is empty or still the placeholder.
    #[must_use]
    pub fn measurement_id(&self) -> Option<&str> {
        let id = self.ga4_measurement_id.trim();
        if id.is_empty() || id == PLACEHOLDER_MEASUREMENT_ID {
            None
        } else {
            Some(id)
        }
    }
}

/// Per-event tracking switches.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsEvents {
    pub page_view: bool,
    pub cv_download: bool,
    pub contact_click: bool,
    pub theme_change: bool,
    pub section_navigation: bool,
    pub error_tracking: bool,
}

impl Default for AnalyticsEvents {
    fn default() -> Self {
        Self {
            page_view: true,
            cv_download: true,
            contact_click: true,
            theme_change: true,
            section_navigation: true,
            error_tracking: true,
        }
    }
}

/// Global error handler routing.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorHandlingConfig {
    pub log_to_console: bool,
    pub send_to_analytics: bool,
}

impl Default for ErrorHandlingConfig {
    fn default() -> Self {
        Self { log_to_console: true, send_to_analytics: true }
    }
}

/// Switches for individual page widgets.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureFlags {
    pub mobile_menu: bool,
    pub accordion_details: bool,
    pub tiger_mascot: bool,
    pub intersection_observer: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            mobile_menu: true,
            accordion_details: true,
            tiger_mascot: true,
            intersection_observer: true,
        }
    }
}
