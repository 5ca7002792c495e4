// src/scroll.rs
use gloo_utils::{document, window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

/// Reading band, as fractions of the viewport height measured from the top.
const BAND_START: f64 = 0.40;
const BAND_END: f64 = 0.45;

const PARALLAX_RANGE: f64 = 600.0;
const PARALLAX_SHIFT: f64 = 120.0;
const FADE_RANGE: f64 = 400.0;
const FADE_MIN_OPACITY: f64 = 0.85;

/// Viewport-relative vertical extent of a section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// Pick the section that sits in the reading band. When several do, the last
/// one in document order wins; when none do, `current` is kept.
pub fn active_section(sections: &[SectionBounds], viewport_height: f64, current: &str) -> String {
    let band_start = viewport_height * BAND_START;
    let band_end = viewport_height * BAND_END;
    sections
        .iter()
        .rev()
        .find(|s| s.top < band_end && s.bottom > band_start)
        .map(|s| s.id.clone())
        .unwrap_or_else(|| current.to_string())
}

/// Hero background shift (px) and opacity for a given scroll position.
pub fn parallax(scroll_y: f64) -> (f64, f64) {
    let shift = scroll_y.clamp(0.0, PARALLAX_RANGE) / PARALLAX_RANGE * PARALLAX_SHIFT;
    let fade = scroll_y.clamp(0.0, FADE_RANGE) / FADE_RANGE;
    let opacity = 1.0 - fade * (1.0 - FADE_MIN_OPACITY);
    (shift, opacity)
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Measure each section currently in the document.
pub fn measure_sections(ids: &[String]) -> Vec<SectionBounds> {
    ids.iter()
        .filter_map(|id| {
            let el = document().get_element_by_id(id)?;
            let rect = el.get_bounding_client_rect();
            Some(SectionBounds {
                id: id.clone(),
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

pub fn scroll_to_section(id: &str) {
    match document().get_element_by_id(id) {
        Some(el) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("No section with id {}", id),
    }
}

pub fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
