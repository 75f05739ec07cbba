//! Page layout primitives: the centred content column and full-height sections.

use leptos::prelude::*;

/// Vertical section padding used unless a section overrides it.
pub const DEFAULT_SECTION_PADDING_PX: u32 = 128;

/// Centred content column, max 1100px wide.
#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! { <div class="container">{children()}</div> }
}

/// Full-viewport-height section with its content centred in a [`Container`].
#[component]
pub fn SectionWrapper(
    #[prop(default = DEFAULT_SECTION_PADDING_PX)] padding_y: u32,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="section" style=section_padding_style(padding_y)>
            <Container>{children()}</Container>
        </section>
    }
}

pub(crate) fn section_padding_style(padding_y: u32) -> String {
    format!("padding-top: {padding_y}px; padding-bottom: {padding_y}px;")
}
