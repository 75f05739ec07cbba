//! Dark card whose border picks up an accent colour on hover.

#[cfg(test)]
#[path = "content_card_test.rs"]
mod content_card_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardAccent {
    #[default]
    Blue,
    Red,
}

pub(crate) fn card_class(accent: CardAccent, hovered: bool) -> &'static str {
    match (hovered, accent) {
        (false, _) => "content-card",
        (true, CardAccent::Blue) => "content-card content-card--hover-blue",
        (true, CardAccent::Red) => "content-card content-card--hover-red",
    }
}

#[component]
pub fn ContentCard(#[prop(optional)] accent: CardAccent, children: Children) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <div
            class=move || card_class(accent, hovered.get())
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            {children()}
        </div>
    }
}
