//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout primitives, decorations and terminal chrome.
//! Shared state is read from Leptos context providers or passed in as signals.

pub mod background;
pub mod content_card;
pub mod layout;
pub mod nav_tree;
pub mod pill;
pub mod rocket;
pub mod terminal;
