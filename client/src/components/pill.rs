//! Rounded uppercase label with a leading dot.

#[cfg(test)]
#[path = "pill_test.rs"]
mod pill_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PillVariant {
    #[default]
    Blue,
    Red,
    Green,
}

impl PillVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "pill pill--blue",
            Self::Red => "pill pill--red",
            Self::Green => "pill pill--green",
        }
    }
}

#[component]
pub fn Pill(#[prop(optional)] variant: PillVariant, children: Children) -> impl IntoView {
    view! {
        <span class=variant.class()>
            <span class="pill__dot"></span>
            {children()}
        </span>
    }
}
