//! Project catalog, category filter, and details markup.
//!
//! The catalog ships inside the binary as `projects.json`. Cards on the page
//! carry `data-category`; details buttons carry `data-project` naming a
//! catalog id.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("projects.json");

/// Filter value that shows every card.
pub const ALL: &str = "all";

/// Shown when a details button names an unknown project.
pub const FALLBACK_DETAILS: &str = "<p>Details coming soon.</p>";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub tech: Vec<String>,
}

impl Project {
    /// Markup for the details modal.
    pub fn details_html(&self) -> String {
        let tech = self.tech.iter().map(|t| escape_html(t)).collect::<Vec<_>>().join(" · ");
        format!(
            "<h3>{}</h3><p>{}</p><p><strong>Tech:</strong> {tech}</p>",
            escape_html(&self.title),
            escape_html(&self.summary),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// The catalog embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the embedded JSON is malformed.
    pub fn builtin() -> Result<Self, serde_json::Error> {
        Self::from_json(CATALOG_JSON)
    }

    /// # Errors
    ///
    /// Returns the parse error if `raw` is not a JSON array of projects.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self { projects: serde_json::from_str(raw)? })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Details markup for `id`, or [`FALLBACK_DETAILS`].
    pub fn details_html(&self, id: &str) -> String {
        self.get(id).map_or_else(|| FALLBACK_DETAILS.to_owned(), Project::details_html)
    }
}

/// Whether a card in `category` stays visible under `filter`.
///
/// Cards without a category count as `all` and only show under the `all`
/// filter.
pub fn is_visible(filter: &str, category: Option<&str>) -> bool {
    filter == ALL || filter == category.unwrap_or(ALL)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, HtmlSelectElement};

    use super::{Catalog, is_visible};
    use crate::{dom, modal};

    const FILTER_ID: &str = "project-filter";
    const CARD_SELECTOR: &str = ".project-card";
    const DETAILS_SELECTOR: &str = ".details-btn";

    pub fn wire(document: &Document) {
        if let Some(filter) = dom::by_id::<HtmlSelectElement>(document, FILTER_ID) {
            let doc = document.clone();
            let select = filter.clone();
            dom::listen(&filter, "change", move |_: Event| {
                let value = select.value();
                for card in dom::query_document(&doc, CARD_SELECTOR) {
                    let category = card.get_attribute("data-category");
                    let display = if is_visible(&value, category.as_deref()) { "" } else { "none" };
                    dom::set_style(&card, "display", display);
                }
            });
        }

        let catalog = match Catalog::builtin() {
            Ok(catalog) => Rc::new(catalog),
            Err(err) => {
                log::error!("project catalog is malformed: {err}");
                Rc::new(Catalog::default())
            }
        };
        for button in dom::query_document(document, DETAILS_SELECTOR) {
            let doc = document.clone();
            let catalog = Rc::clone(&catalog);
            dom::listen(&button, "click", move |ev: Event| {
                let id = ev
                    .current_target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.get_attribute("data-project"))
                    .unwrap_or_default();
                modal::open(&doc, &catalog.details_html(&id));
            });
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::wire;
