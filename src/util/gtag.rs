//! Google tag (`gtag.js`) bootstrap and calls.

use js_sys::{Array, Function, Reflect};
use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::SiteError;
use crate::util::dom;

const TAG_SCRIPT_URL: &str = "https://www.googletagmanager.com/gtag/js";

/// Define `dataLayer`/`gtag`, send the `js` and `config` commands, and load
/// the tag script for `measurement_id`.
pub fn install(measurement_id: &str) -> Result<(), SiteError> {
    let window = dom::window()?;
    let document = dom::document()?;

    let layer = Reflect::get(&window, &"dataLayer".into())?;
    if !Array::is_array(&layer) {
        Reflect::set(&window, &"dataLayer".into(), &Array::new())?;
    }
    let gtag = Function::new_no_args("window.dataLayer.push(arguments);");
    Reflect::set(&window, &"gtag".into(), &gtag)?;

    gtag.call2(&JsValue::UNDEFINED, &"js".into(), &js_sys::Date::new_0())?;
    gtag.call2(&JsValue::UNDEFINED, &"config".into(), &measurement_id.into())?;

    let script = document.create_element("script")?;
    dom::set_attr(&script, "async", "");
    dom::set_attr(&script, "src", &format!("{TAG_SCRIPT_URL}?id={measurement_id}"));
    let head = document.head().ok_or_else(|| SiteError::MissingElement("head".into()))?;
    head.append_child(&script)?;
    Ok(())
}

/// Invoke `window.gtag(command, target, params)`. A page without `gtag` is a no-op.
pub fn call(command: &str, target: &JsValue, params: &Map<String, Value>) -> Result<(), SiteError> {
    let window = dom::window()?;
    let value = Reflect::get(&window, &"gtag".into())?;
    let Some(gtag) = value.dyn_ref::<Function>() else {
        return Ok(());
    };
    let params = js_sys::JSON::parse(&serde_json::to_string(params)?)?;
    gtag.call3(&JsValue::UNDEFINED, &command.into(), target, &params)?;
    Ok(())
}
