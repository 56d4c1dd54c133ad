//! # portfolio
//!
//! WASM behavior for the single-page portfolio site: navigation, theme
//! switching, the project filter and details modal, the contact form
//! simulation, skill bars, the footer year, and the particle background
//! from the `particles` crate.
//!
//! Each module keeps its decisions in plain functions that are tested
//! natively. The browser wiring is compiled only with the `hydrate` feature,
//! and every behavior quietly skips when the page lacks its elements.

pub mod contact;
pub mod modal;
pub mod nav;
pub mod projects;
pub mod skills;
pub mod theme;

#[cfg(feature = "hydrate")]
mod dom;

/// WASM entry point: wire the page and start the background.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use web_sys::KeyboardEvent;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if let Some(year) = document.get_element_by_id("year") {
        let now = js_sys::Date::new_0();
        year.set_text_content(Some(&now.get_full_year().to_string()));
    }

    nav::wire(&document);
    theme::wire(&window, &document);
    modal::wire(&document);
    projects::wire(&document);
    contact::wire(&document);
    skills::schedule(&document);

    let doc = document.clone();
    dom::listen(&document, "keydown", move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            if modal::is_open(&doc) {
                modal::close(&doc);
            }
            nav::close(&doc);
        }
    });

    if let Some(engine) = particles::engine::start_background(particles::consts::CANVAS_ELEMENT_ID) {
        log::debug!("particle background running with {} particles", engine.particle_count());
    }
}
