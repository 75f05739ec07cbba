//! Browser randomness for decorative generators.

/// Uniform sample in `[0, 1)` from `Math.random`.
#[cfg(feature = "hydrate")]
pub fn unit() -> f64 {
    js_sys::Math::random()
}
