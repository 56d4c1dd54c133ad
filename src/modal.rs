//! Project details modal: open/close with fade and focus trapping.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Delay before fading the modal in, so `display: flex` paints first.
pub const FADE_IN_DELAY_MS: u32 = 20;

/// Delay before `display: none`, matching the CSS fade-out.
pub const HIDE_DELAY_MS: u32 = 180;

/// Elements reachable with Tab inside the modal.
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Open,
    Closed,
}

impl ModalState {
    /// State encoded by the modal's `aria-hidden` attribute.
    pub fn from_aria_hidden(value: Option<&str>) -> Self {
        if value == Some("false") { Self::Open } else { Self::Closed }
    }

    pub fn aria_hidden(self) -> &'static str {
        match self {
            Self::Open => "false",
            Self::Closed => "true",
        }
    }
}

/// Where focus must wrap to on Tab, if anywhere.
///
/// `current` is the index of the focused element among `len` focusable
/// elements. Tab on the last wraps to the first, Shift+Tab on the first wraps
/// to the last; every other case keeps the browser's default.
pub fn focus_trap(current: Option<usize>, len: usize, shift: bool) -> Option<usize> {
    let last = len.checked_sub(1)?;
    match (current?, shift) {
        (0, true) => Some(last),
        (i, false) if i == last => Some(0),
        _ => None,
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent};

    use super::{FADE_IN_DELAY_MS, FOCUSABLE_SELECTOR, HIDE_DELAY_MS, ModalState, focus_trap};
    use crate::dom;

    const MODAL_ID: &str = "project-modal";
    const CONTENT_ID: &str = "modal-content";
    const CLOSE_SELECTOR: &str = ".modal-close";

    pub fn is_open(document: &Document) -> bool {
        document
            .get_element_by_id(MODAL_ID)
            .is_some_and(|m| ModalState::from_aria_hidden(m.get_attribute("aria-hidden").as_deref()) == ModalState::Open)
    }

    /// Show the modal with `html` as its content.
    pub fn open(document: &Document, html: &str) {
        let (Some(modal), Some(content)) =
            (document.get_element_by_id(MODAL_ID), document.get_element_by_id(CONTENT_ID))
        else {
            return;
        };
        content.set_inner_html(html);
        dom::set_attr(&modal, "aria-hidden", ModalState::Open.aria_hidden());
        dom::set_style(&modal, "display", "flex");

        let fading = modal.clone();
        dom::after(FADE_IN_DELAY_MS, move || dom::set_style(&fading, "opacity", "1"));

        if let Ok(Some(close)) = modal.query_selector(CLOSE_SELECTOR) {
            dom::focus(&close);
        }
    }

    pub fn close(document: &Document) {
        let Some(modal) = document.get_element_by_id(MODAL_ID) else {
            return;
        };
        dom::set_attr(&modal, "aria-hidden", ModalState::Closed.aria_hidden());
        dom::set_style(&modal, "opacity", "0");
        dom::after(HIDE_DELAY_MS, move || dom::set_style(&modal, "display", "none"));
    }

    /// Wire the close button, backdrop click, and Tab trapping.
    pub fn wire(document: &Document) {
        let Some(modal) = document.get_element_by_id(MODAL_ID) else {
            return;
        };

        if let Ok(Some(button)) = modal.query_selector(CLOSE_SELECTOR) {
            let doc = document.clone();
            dom::listen(&button, "click", move |_: Event| close(&doc));
        }

        let doc = document.clone();
        let backdrop: EventTarget = modal.clone().into();
        dom::listen(&modal, "click", move |ev: Event| {
            if ev.target().is_some_and(|t| t == backdrop) {
                close(&doc);
            }
        });

        let doc = document.clone();
        let trap = modal.clone();
        dom::listen(&modal, "keydown", move |ev: KeyboardEvent| {
            if ev.key() == "Tab" {
                trap_tab(&doc, &trap, &ev);
            }
        });
    }

    fn trap_tab(document: &Document, modal: &Element, ev: &KeyboardEvent) {
        let focusable = dom::query_all(modal, FOCUSABLE_SELECTOR);
        let active = document.active_element();
        let current = active.and_then(|a| focusable.iter().position(|el| *el == a));
        if let Some(next) = focus_trap(current, focusable.len(), ev.shift_key()) {
            ev.prevent_default();
            dom::focus(&focusable[next]);
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{close, is_open, open, wire};
