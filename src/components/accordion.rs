//! Accordion binding: mirrors an [`AccordionGroup`] onto a section's markup.
//!
//! ARCHITECTURE
//! ============
//! One capture-phase click listener sits on the group root. It resolves the
//! clicked `.toggle-details` control, stops the event from reaching ancestor
//! handlers, and applies the group's [`Transition`] to panels and triggers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::error::SiteError;
use crate::state::accordion::{AccordionGroup, ROTATE_CLOSED, ROTATE_OPEN, Transition, Trigger};
use crate::util::dom;

/// Section ids hosting an accordion group.
pub const ACCORDION_GROUPS: [&str; 2] = ["experience", "projects"];

const TRIGGER_SELECTOR: &str = ".toggle-details[aria-controls]";
const TOGGLE_SELECTOR: &str = ".toggle-details";
const ICON_SELECTOR: &str = "[data-lucide]";
const HIDDEN_CLASS: &str = "hidden";

struct GroupView {
    root: Element,
    buttons: Vec<Element>,
    panels: Vec<Option<Element>>,
}

impl GroupView {
    fn trigger_index(&self, event: &Event) -> Option<usize> {
        let target = dom::event_element(event)?;
        let Ok(Some(button)) = target.closest(TOGGLE_SELECTOR) else {
            return None;
        };
        if !self.root.contains(Some(button.as_ref())) {
            return None;
        }
        event.prevent_default();
        event.stop_immediate_propagation();
        self.buttons.iter().position(|b| *b == button)
    }

    fn apply(&self, transition: &Transition) {
        for &index in &transition.closed {
            self.render(index, false);
        }
        if let Some(index) = transition.opened {
            self.render(index, true);
        }
    }

    fn render(&self, index: usize, open: bool) {
        if let Some(Some(panel)) = self.panels.get(index) {
            dom::set_class(panel, HIDDEN_CLASS, !open);
        }
        let Some(button) = self.buttons.get(index) else {
            return;
        };
        dom::set_attr(button, "aria-expanded", if open { "true" } else { "false" });
        if let Ok(Some(icon)) = button.query_selector(ICON_SELECTOR) {
            if let Some(icon) = icon.dyn_ref::<HtmlElement>() {
                let transform = if open { ROTATE_OPEN } else { ROTATE_CLOSED };
                if let Err(err) = icon.style().set_property("transform", transform) {
                    log::debug!("accordion icon not rotated: {err:?}");
                }
            }
        }
    }
}

/// Wire the accordion rooted at `root`.
pub fn mount(root: &Element, document: &Document) -> Result<(), SiteError> {
    let buttons = dom::elements(&root.query_selector_all(TRIGGER_SELECTOR)?);
    let panels: Vec<Option<Element>> = buttons
        .iter()
        .map(|b| b.get_attribute("aria-controls").and_then(|id| document.get_element_by_id(&id)))
        .collect();

    let triggers = buttons
        .iter()
        .zip(&panels)
        .map(|(button, panel)| {
            let trigger = Trigger::new(button.get_attribute("aria-controls").unwrap_or_default(), panel.is_some());
            if button.get_attribute("aria-expanded").as_deref() == Some("true") {
                trigger.expanded()
            } else {
                trigger
            }
        })
        .collect();

    let mut group = AccordionGroup::new(root.id(), triggers);
    log::debug!("accordion {} wired with {} triggers", group.group_id(), group.len());
    for trigger in (0..group.len()).filter_map(|i| group.trigger(i)) {
        if !trigger.panel_resolved {
            log::debug!("accordion {}: no panel {:?}", group.group_id(), trigger.panel_id);
        }
    }

    let view = GroupView { root: root.clone(), buttons, panels };
    view.apply(&group.snapshot());
    dom::listen(root, "click", true, move |event| {
        let Some(index) = view.trigger_index(&event) else {
            return;
        };
        if let Some(transition) = group.toggle_trigger(index) {
            view.apply(&transition);
        }
    })
}
