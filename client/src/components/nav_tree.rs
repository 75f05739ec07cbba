//! File-tree style navigation for the OS shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clicking an entry is the only way the active section changes. The tree
//! writes `NavState` from context; the page reads it to pick a content view.

use leptos::prelude::*;

use crate::state::nav::{NAV_ITEMS, NavItem, NavState};

#[component]
pub fn NavTree() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <nav class="nav-tree" aria-label="Sections">
            {NAV_ITEMS.iter().map(|item| view! { <NavEntry item=item nav=nav/> }).collect_view()}
        </nav>
    }
}

#[component]
fn NavEntry(item: &'static NavItem, nav: RwSignal<NavState>) -> impl IntoView {
    let section = item.section;
    let id = section.id();
    let is_active = move || nav.get().is_active(section);
    let on_click = move |_| {
        nav.update(|n| n.navigate(id));
        #[cfg(feature = "hydrate")]
        log::debug!("nav: section -> {id}");
    };

    view! {
        <button
            class=move || if is_active() { "nav-tree__item nav-tree__item--active" } else { "nav-tree__item" }
            style=format!("padding-left: {}px;", item.indent_px())
            aria-current=move || if is_active() { Some("page") } else { None }
            on:click=on_click
        >
            <span class="nav-tree__icon">{item.icon}</span>
            <span class="nav-tree__label">{item.label}</span>
        </button>
    }
}
