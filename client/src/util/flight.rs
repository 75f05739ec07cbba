//! Scroll-driven flight math for the launchpad hero decorations.
//!
//! Every value here is a pure function of scroll progress `p` in `[0, 1]`.
//! The rocket climbs, the atmosphere fades, stars fade in and the engine
//! glow ramps up as the reader scrolls toward the call to action.

#[cfg(test)]
#[path = "flight_test.rs"]
mod flight_test;

/// Rocket offset at `p = 0`, as a percentage from the viewport bottom.
pub const ROCKET_BASE_PCT: f64 = 5.0;
/// Distance the rocket travels over the full scroll range.
pub const ROCKET_TRAVEL_PCT: f64 = 85.0;
/// Easing exponent; below 1.0 so early scroll moves the rocket faster.
pub const ROCKET_EASING: f64 = 0.8;
/// Progress past which the "destination reached" indicator shows.
pub const ARRIVAL_THRESHOLD: f64 = 0.85;

const FLAME_BASE_PX: f64 = 28.0;
const FLAME_GAIN_PX: f64 = 48.0;
const PLUME_BASE_PX: f64 = 36.0;
const PLUME_GAIN_PX: f64 = 72.0;
const FLAME_VISIBLE_MIN_GLOW: f64 = 0.01;
const SHADOW_MIN_GLOW: f64 = 0.3;

/// Clamp into `[0, 1]`, mapping NaN to zero.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Rocket offset from the bottom of the viewport, in percent. Stays in `[5, 90]`.
pub fn rocket_offset_pct(progress: f64) -> f64 {
    clamp_unit(progress).powf(ROCKET_EASING) * ROCKET_TRAVEL_PCT + ROCKET_BASE_PCT
}

/// Atmosphere gradient opacity. Fully gone by 40% scroll.
pub fn atmosphere_opacity(progress: f64) -> f64 {
    (1.0 - clamp_unit(progress) * 2.5).max(0.0)
}

/// Starfield opacity. Starts at 20% scroll, fully visible by 70%.
pub fn stars_opacity(progress: f64) -> f64 {
    ((clamp_unit(progress) - 0.2) * 2.0).clamp(0.0, 1.0)
}

/// Engine glow intensity. Saturates at one third of the scroll range.
pub fn engine_glow(progress: f64) -> f64 {
    (clamp_unit(progress) * 3.0).min(1.0)
}

pub fn has_arrived(progress: f64) -> bool {
    clamp_unit(progress) > ARRIVAL_THRESHOLD
}

pub fn flame_height_px(glow: f64) -> f64 {
    FLAME_BASE_PX + glow * FLAME_GAIN_PX
}

pub fn plume_height_px(glow: f64) -> f64 {
    PLUME_BASE_PX + glow * PLUME_GAIN_PX
}

pub fn flame_visible(glow: f64) -> bool {
    glow > FLAME_VISIBLE_MIN_GLOW
}

/// CSS `filter` for the rocket hull, or `None` while the glow is too faint.
pub fn hull_shadow_filter(glow: f64) -> Option<String> {
    if glow <= SHADOW_MIN_GLOW {
        return None;
    }
    Some(format!(
        "drop-shadow(0 0 {:.2}px rgba(95,180,247,{:.3}))",
        20.0 * glow,
        0.4 * glow
    ))
}

pub fn flame_blur_px(glow: f64) -> f64 {
    1.0 + glow
}

/// All decoration parameters derived from one scroll sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightParams {
    pub rocket_offset_pct: f64,
    pub atmosphere_opacity: f64,
    pub stars_opacity: f64,
    pub engine_glow: f64,
    pub arrived: bool,
}

impl FlightParams {
    #[must_use]
    pub fn from_progress(progress: f64) -> Self {
        Self {
            rocket_offset_pct: rocket_offset_pct(progress),
            atmosphere_opacity: atmosphere_opacity(progress),
            stars_opacity: stars_opacity(progress),
            engine_glow: engine_glow(progress),
            arrived: has_arrived(progress),
        }
    }
}

impl Default for FlightParams {
    fn default() -> Self {
        Self::from_progress(0.0)
    }
}
