//! Error type shared by component setup paths.
//!
//! Nothing here is fatal to the page: the bootstrapper logs each error and
//! moves on to the next component.

/// Failure raised while wiring a component to the page.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A required element was not present in the markup.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// The page configuration could not be parsed.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
