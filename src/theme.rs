//! Light/dark theme selection and toggle.
//!
//! The stored preference (`localStorage["futuro-theme"]`) wins over the
//! system `prefers-color-scheme`. Applying a theme sets the `--bg-0` custom
//! property on `<html>`, persists the choice, and mirrors it into the toggle
//! button's `aria-pressed`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: if storage is unavailable the theme is still
//! applied for this page view and a warning is logged.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const STORAGE_KEY: &str = "futuro-theme";

#[cfg(feature = "hydrate")]
const TOGGLE_ID: &str = "theme-toggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Pick the initial theme from a stored value and the system preference.
    ///
    /// Any stored value other than `"dark"` means light.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored {
            Some(value) if value == Self::Dark.as_str() => Self::Dark,
            Some(_) => Self::Light,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Page background for the `--bg-0` custom property.
    pub fn background(self) -> &'static str {
        match self {
            Self::Dark => "#08070b",
            Self::Light => "#f6f7fb",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, HtmlElement, Window};

    use super::{STORAGE_KEY, TOGGLE_ID, Theme};
    use crate::dom;

    fn stored_preference(window: &Window) -> Option<String> {
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }

    fn prefers_dark(window: &Window) -> bool {
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }

    fn persist(window: &Window, theme: Theme) {
        let saved = match window.local_storage() {
            Ok(Some(storage)) => storage.set_item(STORAGE_KEY, theme.as_str()).is_ok(),
            _ => false,
        };
        if !saved {
            log::warn!("LocalStorage is not available. Theme preference will not persist.");
        }
    }

    pub fn apply(window: &Window, document: &Document, theme: Theme) {
        let root = document.document_element().and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(root) = root {
            if let Err(err) = root.style().set_property("--bg-0", theme.background()) {
                log::warn!("failed to set theme background: {err:?}");
            }
        }
        persist(window, theme);
        if let Some(toggle) = document.get_element_by_id(TOGGLE_ID) {
            dom::set_attr(&toggle, "aria-pressed", if theme.is_dark() { "true" } else { "false" });
        }
    }

    /// Apply the initial theme and wire the toggle button.
    pub fn wire(window: &Window, document: &Document) {
        let initial = Theme::resolve(stored_preference(window).as_deref(), prefers_dark(window));
        apply(window, document, initial);

        let Some(toggle) = document.get_element_by_id(TOGGLE_ID) else {
            return;
        };
        let current = Rc::new(Cell::new(initial));
        let window = window.clone();
        let document = document.clone();
        dom::listen(&toggle, "click", move |_: Event| {
            let next = current.get().toggled();
            current.set(next);
            apply(&window, &document, next);
        });
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{apply, wire};
