//! Launchpad landing page with the scroll-driven rocket ascent.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the browser subscriptions. On mount it marks the client
//! ready, samples the viewport and scatters the starfield; a scroll listener
//! then keeps `ScrollState` current. Decorations read derived `FlightParams`
//! only, and stay unrendered until the client is ready.

use leptos::prelude::*;

use crate::components::background::Background;
use crate::components::rocket::{ArrivalIndicator, RocketShip, dock_style};
use crate::pages::launchpad_sections::{
    CtaSection, HeroSection, ProblemSection, RealitySection, SolutionSection, VisionSection,
};
use crate::state::scroll::ScrollState;
use crate::util::flight::FlightParams;
use crate::util::starfield::Star;
use crate::util::viewport::{read_scroll_progress, read_viewport_width};

#[component]
pub fn LaunchpadPage() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let stars = RwSignal::new(Vec::<Star>::new());

    // Effects only run on the client, so this doubles as the readiness gate.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::starfield::{LAUNCHPAD_STAR_COUNT, generate_stars};
            stars.set(generate_stars(LAUNCHPAD_STAR_COUNT, crate::util::random::unit));
            log::debug!("launchpad: mounted with {LAUNCHPAD_STAR_COUNT} stars");
        }
        let width = read_viewport_width();
        let progress = read_scroll_progress();
        scroll.update(|s| {
            s.mark_ready(width);
            if let Some(p) = progress {
                s.set_progress(p);
            }
        });
    });

    #[cfg(feature = "hydrate")]
    {
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| {
            if let Some(p) = read_scroll_progress() {
                scroll.update(|s| s.set_progress(p));
            }
        });
        let on_resize = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = read_viewport_width() {
                scroll.update(|s| s.viewport_width = width);
            }
        });
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }

    let flight = Memo::new(move |_| scroll.get().flight());
    let client_ready = Memo::new(move |_| scroll.get().client_ready);
    let show_decor = Memo::new(move |_| scroll.get().show_desktop_decor());

    let stars_opacity = Signal::derive(move || flight.get().stars_opacity);
    let atmosphere_opacity = Signal::derive(move || flight.get().atmosphere_opacity);
    let glow = Signal::derive(move || flight.get().engine_glow);
    let arrived = Signal::derive(move || flight.get().arrived);

    view! {
        <div class="launchpad">
            <Show when=move || client_ready.get()>
                <Background stars=stars stars_opacity=stars_opacity atmosphere_opacity=atmosphere_opacity/>
            </Show>

            <div class="rocket-dock" style=move || rocket_dock(flight.get(), show_decor.get())>
                <RocketShip glow=glow/>
            </div>

            <ArrivalIndicator arrived=arrived visible=show_decor/>

            <main class="launchpad__main">
                <HeroSection/>
                <ProblemSection/>
                <RealitySection/>
                <VisionSection/>
                <SolutionSection/>
                <CtaSection/>
            </main>
        </div>
    }
}

fn rocket_dock(flight: FlightParams, visible: bool) -> String {
    dock_style(flight.rocket_offset_pct, visible)
}
