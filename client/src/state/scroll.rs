//! Scroll and viewport state for the launchpad page.
//!
//! DESIGN
//! ======
//! Only the raw scroll sample is stored; every decoration value is derived
//! through `util::flight` on read so nothing can drift out of sync.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::util::flight::{FlightParams, clamp_unit};
use crate::util::viewport::is_desktop_width;

/// Ambient scroll state, provided via context as `RwSignal<ScrollState>`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Scroll progress, always in `[0, 1]`.
    pub progress: f64,
    /// Set once the client has hydrated and browser APIs are reachable.
    pub client_ready: bool,
    /// Last observed `window.innerWidth`, 0 before the client is ready.
    pub viewport_width: f64,
}

impl ScrollState {
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = clamp_unit(progress);
    }

    pub fn mark_ready(&mut self, viewport_width: Option<f64>) {
        self.client_ready = true;
        if let Some(width) = viewport_width {
            self.viewport_width = width;
        }
    }

    pub fn flight(&self) -> FlightParams {
        FlightParams::from_progress(self.progress)
    }

    /// Whether the fixed rocket and arrival indicator should render.
    pub fn show_desktop_decor(&self) -> bool {
        self.client_ready && is_desktop_width(self.viewport_width)
    }
}
