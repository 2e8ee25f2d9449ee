//! Enter-to-next-field navigation for keyboard-driven data entry.
//!
//! One delegated `keydown` listener on the document covers every form on
//! the page, including rows rendered after installation.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent, Node};

/// Controls that take part in Enter navigation, in document order
const FOCUSABLE: &str = "input, select, textarea, button";

const FIRST_INPUT: &str = "input:not([type=\"hidden\"]):not([disabled])";

/// Whether Enter keeps its native behavior on this control.
///
/// `tag` is the element tag name, `type_attr` its `type` attribute. A
/// `<button>` without a type is a submit button.
pub fn passes_through(tag: &str, type_attr: Option<&str>) -> bool {
    if tag.eq_ignore_ascii_case("textarea") {
        return true;
    }
    let kind = match type_attr {
        Some(t) => t,
        None if tag.eq_ignore_ascii_case("button") => "submit",
        None => return false,
    };
    kind.eq_ignore_ascii_case("submit")
}

/// Index of the control after `current`; `None` for the last one or when the
/// focused element is not a listed control.
pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    let next = current? + 1;
    (next < len).then_some(next)
}

/// Focus the first visible, enabled input and start listening for Enter
pub fn install() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("keyboard navigation: no document");
        return;
    };

    focus_first_input(&document);

    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| on_keydown(&event));
    if let Err(e) =
        document.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
    {
        log::error!("keyboard navigation: listener not installed: {:?}", e);
        return;
    }
    // Lives as long as the page
    handler.forget();
}

fn focus_first_input(document: &Document) {
    let first = document
        .query_selector(FIRST_INPUT)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(el) = first {
        let _ = el.focus();
    }
}

/// Focus the element with `id`, if it is on the page
pub fn focus_by_id(id: &str) {
    let el = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match el {
        Some(el) => {
            let _ = el.focus();
        }
        None => log::debug!("keyboard navigation: #{} not found", id),
    }
}

fn on_keydown(event: &Event) {
    let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
        return;
    };
    if key_event.key() != "Enter" {
        return;
    }
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let Ok(Some(form)) = target.closest("form") else {
        return;
    };

    let type_attr = target.get_attribute("type");
    if passes_through(&target.tag_name(), type_attr.as_deref()) {
        return;
    }
    event.prevent_default();

    let Ok(controls) = form.query_selector_all(FOCUSABLE) else {
        return;
    };
    let len = controls.length() as usize;
    let target_node: &Node = target.as_ref();
    let current = (0..len).find(|&i| {
        controls
            .item(i as u32)
            .is_some_and(|node| node.is_same_node(Some(target_node)))
    });

    let Some(next) = next_index(current, len) else {
        return;
    };
    let Some(el) = controls
        .item(next as u32)
        .and_then(|node| node.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let _ = el.focus();
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.select();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_through() {
        assert!(passes_through("TEXTAREA", None));
        assert!(passes_through("INPUT", Some("submit")));
        assert!(passes_through("BUTTON", None));
        assert!(passes_through("BUTTON", Some("submit")));

        assert!(!passes_through("BUTTON", Some("button")));
        assert!(!passes_through("INPUT", Some("text")));
        assert!(!passes_through("INPUT", None));
        assert!(!passes_through("SELECT", None));
    }

    #[test]
    fn test_next_index() {
        assert_eq!(next_index(Some(0), 3), Some(1));
        assert_eq!(next_index(Some(1), 3), Some(2));
        // last control keeps focus
        assert_eq!(next_index(Some(2), 3), None);
        // focused element not among the form controls
        assert_eq!(next_index(None, 3), None);
    }
}
