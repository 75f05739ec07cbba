//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and decoration math
//! from page and component logic to improve reuse and testability.

pub mod clock;
pub mod data_string;
pub mod flight;
pub mod random;
pub mod starfield;
pub mod viewport;
