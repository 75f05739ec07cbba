//! Decorative starfield generation.
//!
//! Stars are placed once per mount. The randomness source is passed in so the
//! browser can use `Math.random` while tests stay deterministic.

#[cfg(test)]
#[path = "starfield_test.rs"]
mod starfield_test;

/// Number of stars behind the launchpad page.
pub const LAUNCHPAD_STAR_COUNT: usize = 120;

/// A single star, positioned in viewport percentages.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub id: usize,
    /// Horizontal position in `[0, 100)` percent.
    pub x: f64,
    /// Vertical position in `[0, 100)` percent.
    pub y: f64,
    /// Diameter in `[1, 3)` px.
    pub size: f64,
    /// Opacity in `[0.2, 0.7)`.
    pub opacity: f64,
}

impl Star {
    /// Inline style placing this star inside its layer.
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; width: {:.2}px; height: {:.2}px; opacity: {:.3};",
            self.x, self.y, self.size, self.size, self.opacity
        )
    }
}

/// Generate `count` stars. `next_unit` must yield values in `[0, 1)`;
/// anything outside is clamped so stars never leave the layer.
pub fn generate_stars(count: usize, mut next_unit: impl FnMut() -> f64) -> Vec<Star> {
    let mut unit = move || {
        let v = next_unit();
        if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
    };
    (0..count)
        .map(|id| Star {
            id,
            x: unit() * 100.0,
            y: unit() * 100.0,
            size: unit() * 2.0 + 1.0,
            opacity: unit() * 0.5 + 0.2,
        })
        .collect()
}
