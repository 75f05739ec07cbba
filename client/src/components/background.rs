//! Fixed background layers behind the launchpad content.
//!
//! Layer order, back to front: deep space, starfield, atmosphere, grid.
//! Deep space and stars fade in together as the atmosphere fades out.

use leptos::prelude::*;

use crate::util::starfield::Star;

#[component]
pub fn Background(
    #[prop(into)] stars: Signal<Vec<Star>>,
    #[prop(into)] stars_opacity: Signal<f64>,
    #[prop(into)] atmosphere_opacity: Signal<f64>,
) -> impl IntoView {
    view! {
        <div class="background" aria-hidden="true">
            <div class="background__space" style=move || opacity_style(stars_opacity.get())></div>
            <Stars data=stars opacity=stars_opacity/>
            <div class="background__atmosphere" style=move || opacity_style(atmosphere_opacity.get())></div>
            <div class="background__grid"></div>
        </div>
    }
}

#[component]
fn Stars(data: Signal<Vec<Star>>, opacity: Signal<f64>) -> impl IntoView {
    view! {
        <div class="stars" style=move || opacity_style(opacity.get())>
            <For
                each=move || data.get()
                key=|star| star.id
                children=|star| view! { <div class="star" style=star.style()></div> }
            />
        </div>
    }
}

fn opacity_style(opacity: f64) -> String {
    format!("opacity: {opacity:.3};")
}
