//! Window-level `error` and `unhandledrejection` listeners.

use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ErrorEvent, PromiseRejectionEvent};

use crate::components::analytics::Tracker;
use crate::error::SiteError;
use crate::error_report::{ErrorReport, ErrorReporter};
use crate::util::dom;

fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match js_sys::JSON::stringify(value) {
        Ok(json) => json.as_string().unwrap_or_default(),
        Err(_) => format!("{value:?}"),
    }
}

fn stack_of(error: &JsValue) -> Option<String> {
    if error.is_undefined() || error.is_null() {
        return None;
    }
    match Reflect::get(error, &"stack".into()) {
        Ok(stack) => stack.as_string(),
        Err(_) => None,
    }
}

pub fn mount(reporter: ErrorReporter, tracker: Option<Rc<Tracker>>) -> Result<(), SiteError> {
    let window = dom::window()?;
    let reporter = Rc::new(reporter);

    {
        let reporter = Rc::clone(&reporter);
        let tracker = tracker.clone();
        dom::listen(&window, "error", false, move |event| {
            let Some(event) = event.dyn_ref::<ErrorEvent>() else {
                return;
            };
            let report = ErrorReport::script(
                &event.message(),
                &event.filename(),
                event.lineno(),
                event.colno(),
                stack_of(&event.error()),
            );
            reporter.handle(report, tracker.as_deref());
        })?;
    }

    dom::listen(&window, "unhandledrejection", false, move |event| {
        let Some(event) = event.dyn_ref::<PromiseRejectionEvent>() else {
            return;
        };
        reporter.handle(ErrorReport::rejection(&describe(&event.reason())), tracker.as_deref());
    })
}
