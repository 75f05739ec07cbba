//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (browser subscriptions, timers)
//! and delegates rendering details to `components`.

pub mod launchpad;
pub(crate) mod launchpad_sections;
pub mod os;
pub(crate) mod os_views;
