//! Window scroll and size readers.
//!
//! The browser readers return `None` outside a hydrated client (SSR, tests,
//! or a missing `window`) so callers can keep their neutral defaults.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use super::flight::clamp_unit;

/// Minimum viewport width, in CSS pixels, for the fixed rocket decorations.
pub const DESKTOP_MIN_WIDTH: f64 = 1280.0;

/// Ratio of scroll offset to maximum scrollable distance, clamped to `[0, 1]`.
///
/// A page no taller than the viewport has nothing to scroll and reports 0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, inner_height: f64) -> f64 {
    let scrollable = scroll_height - inner_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    clamp_unit(scroll_y / scrollable)
}

pub fn is_desktop_width(width: f64) -> bool {
    width >= DESKTOP_MIN_WIDTH
}

/// Current scroll progress of the document.
pub fn read_scroll_progress() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let scroll_y = window.scroll_y().ok()?;
        let inner_height = window.inner_height().ok()?.as_f64()?;
        let scroll_height = f64::from(window.document()?.document_element()?.scroll_height());
        Some(scroll_progress(scroll_y, scroll_height, inner_height))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Current `window.innerWidth`.
pub fn read_viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
