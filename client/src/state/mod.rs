//! Client-side UI state.
//!
//! DESIGN
//! ======
//! State structs are plain data wrapped in `RwSignal` and shared through
//! Leptos context, so their transitions stay unit-testable without a browser.

pub mod nav;
pub mod scroll;
