//! Rocket decoration and the "destination reached" badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both render fixed to the viewport on desktop widths. The page feeds them
//! values from `util::flight`; nothing here reads scroll state directly.

#[cfg(test)]
#[path = "rocket_test.rs"]
mod rocket_test;

use leptos::prelude::*;

use crate::util::flight::{flame_blur_px, flame_height_px, flame_visible, hull_shadow_filter, plume_height_px};

/// SVG rocket with an engine flame that grows with `glow`.
#[component]
pub fn RocketShip(#[prop(into)] glow: Signal<f64>) -> impl IntoView {
    view! {
        <div class="rocket">
            <svg
                width="56"
                height="72"
                viewBox="0 0 48 64"
                style=move || hull_style(glow.get())
            >
                <defs>
                    <linearGradient id="rocketBody" x1="14" y1="20" x2="34" y2="20">
                        <stop offset="0%" style="stop-color:#2a3f55"/>
                        <stop offset="50%" style="stop-color:#3d5a7a"/>
                        <stop offset="100%" style="stop-color:#2a3f55"/>
                    </linearGradient>
                    <linearGradient id="rocketNose" x1="24" y1="2" x2="24" y2="20">
                        <stop offset="0%" style="stop-color:#5fb4f7"/>
                        <stop offset="100%" style="stop-color:#3d5a7a"/>
                    </linearGradient>
                    <linearGradient id="rocketFin" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" style="stop-color:#3d5a7a"/>
                        <stop offset="100%" style="stop-color:#1a2a3a"/>
                    </linearGradient>
                </defs>
                <ellipse cx="24" cy="20" rx="10" ry="18" fill="url(#rocketBody)"/>
                <path d="M24 2 L34 20 L14 20 Z" fill="url(#rocketNose)"/>
                <circle cx="24" cy="18" r="4" fill="#0a1628" stroke="#5fb4f7" stroke-width="1"/>
                <circle cx="24" cy="18" r="2" fill="rgba(95,180,247,0.3)"/>
                <path d="M14 35 L8 48 L14 42 Z" fill="url(#rocketFin)"/>
                <path d="M34 35 L40 48 L34 42 Z" fill="url(#rocketFin)"/>
                <rect x="18" y="36" width="12" height="6" rx="1" fill="#1a2a3a"/>
            </svg>

            <Show when=move || flame_visible(glow.get())>
                <div class="rocket__exhaust">
                    <div class="rocket__flame" style=move || flame_style(glow.get())></div>
                    <div class="rocket__plume" style=move || plume_style(glow.get())></div>
                </div>
            </Show>
        </div>
    }
}

/// Badge shown in the top right once the reader reaches the call to action.
#[component]
pub fn ArrivalIndicator(#[prop(into)] arrived: Signal<bool>, #[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class=move || if arrived.get() { "arrival arrival--reached" } else { "arrival" }
            style=move || display_style(visible.get(), "flex")
        >
            <span class="arrival__dot"></span>
            "DESTINATION REACHED"
        </div>
    }
}

pub(crate) fn hull_style(glow: f64) -> String {
    hull_shadow_filter(glow).map(|filter| format!("filter: {filter};")).unwrap_or_default()
}

pub(crate) fn flame_style(glow: f64) -> String {
    format!("height: {:.2}px; filter: blur({:.2}px);", flame_height_px(glow), flame_blur_px(glow))
}

pub(crate) fn plume_style(glow: f64) -> String {
    format!("height: {:.2}px; opacity: {glow:.3};", plume_height_px(glow))
}

/// Inline style positioning the rocket dock `offset_pct` from the bottom.
pub(crate) fn dock_style(offset_pct: f64, visible: bool) -> String {
    format!("bottom: {offset_pct:.3}%; {}", display_style(visible, "block"))
}

pub(crate) fn display_style(visible: bool, shown: &str) -> String {
    if visible { format!("display: {shown};") } else { "display: none;".to_owned() }
}
