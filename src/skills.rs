//! Skill bars: each `.progress` grows its inner `<span>` to `data-value`%.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// Delay after start before the bars animate, so the 0% state paints first.
pub const ANIMATE_DELAY_MS: u32 = 200;

/// CSS width for a bar's `data-value`. Missing, non-numeric, or non-finite
/// values give `0%`; negative zero prints as `0%`.
pub fn bar_width(data_value: Option<&str>) -> String {
    let value = data_value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map_or(0.0, |v| v + 0.0);
    format!("{value}%")
}

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::Document;

    use super::{ANIMATE_DELAY_MS, bar_width};
    use crate::dom;

    const BAR_SELECTOR: &str = ".progress";

    fn animate(document: &Document) {
        for bar in dom::query_document(document, BAR_SELECTOR) {
            let width = bar_width(bar.get_attribute("data-value").as_deref());
            if let Ok(Some(fill)) = bar.query_selector("span") {
                dom::set_style(&fill, "width", &width);
            }
        }
    }

    /// Animate all bars after [`ANIMATE_DELAY_MS`].
    pub fn schedule(document: &Document) {
        let doc = document.clone();
        dom::after(ANIMATE_DELAY_MS, move || animate(&doc));
    }
}

#[cfg(feature = "hydrate")]
pub use browser::schedule;
