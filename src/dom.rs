//! Small web-sys helpers shared by the page behaviors.
//!
//! Every lookup returns `Option` so a page without a given element simply
//! skips the behavior that needs it.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// Element by id, cast to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(err) => {
            log::warn!("bad selector `{selector}`: {err:?}");
            Vec::new()
        }
    }
}

/// [`query_all`] over the whole document.
pub fn query_document(document: &Document, selector: &str) -> Vec<Element> {
    document.document_element().map_or_else(Vec::new, |root| query_all(&root, selector))
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
///
/// Events that do not cast to `E` are ignored.
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for `{event}`: {err:?}");
    }
    closure.forget();
}

/// Run `f` once after `millis`.
pub fn after(millis: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(millis, f).forget();
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::warn!("failed to set `{name}`: {err:?}");
    }
}

/// Set one inline style property on `el` if it is an HTML element.
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("failed to set style `{property}`: {err:?}");
    }
}

/// Move focus to `el` if it is focusable.
pub fn focus(el: &Element) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        if let Err(err) = el.focus() {
            log::warn!("failed to focus element: {err:?}");
        }
    }
}
