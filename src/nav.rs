//! Mobile navigation menu and in-page anchor scrolling.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class that reveals the nav list on small screens.
pub const SHOW_CLASS: &str = "show";

/// Open/closed state of the collapsible nav list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    expanded: bool,
}

impl NavMenu {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.expanded, false)
    }

    /// Value for the toggle button's `aria-expanded`.
    pub fn aria_expanded(self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

/// Element id targeted by an in-page link, if `href` is one.
///
/// A bare `#` is a placeholder link and has no target.
pub fn scroll_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{
        Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    };

    use super::{NavMenu, SHOW_CLASS, scroll_target};
    use crate::dom;

    const TOGGLE_ID: &str = "nav-toggle";
    const LIST_ID: &str = "nav-list";

    fn current(list: &Element) -> NavMenu {
        NavMenu::new(list.class_list().contains(SHOW_CLASS))
    }

    fn render(list: &Element, toggle: &Element, menu: NavMenu) {
        if let Err(err) = list.class_list().toggle_with_force(SHOW_CLASS, menu.is_expanded()) {
            log::warn!("failed to update nav list: {err:?}");
        }
        dom::set_attr(toggle, "aria-expanded", menu.aria_expanded());
    }

    /// Collapse the menu if it is open.
    pub fn close(document: &Document) {
        let (Some(list), Some(toggle)) =
            (document.get_element_by_id(LIST_ID), document.get_element_by_id(TOGGLE_ID))
        else {
            return;
        };
        let mut menu = current(&list);
        if menu.close() {
            render(&list, &toggle, menu);
        }
    }

    pub fn wire(document: &Document) {
        if let (Some(list), Some(toggle)) =
            (document.get_element_by_id(LIST_ID), document.get_element_by_id(TOGGLE_ID))
        {
            let button = toggle.clone();
            dom::listen(&toggle, "click", move |_: Event| {
                let mut menu = current(&list);
                menu.toggle();
                render(&list, &button, menu);
            });
        }

        let doc = document.clone();
        dom::listen(document, "click", move |ev: Event| on_anchor_click(&doc, &ev));
    }

    fn on_anchor_click(document: &Document, ev: &Event) {
        let Some(origin) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(anchor)) = origin.closest("a[href^=\"#\"]") else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let Some(target) = scroll_target(&href).and_then(|id| document.get_element_by_id(id)) else {
            return;
        };

        ev.prevent_default();
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
        close(document);
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{close, wire};
