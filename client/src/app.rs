//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{SITE_DESCRIPTION, SITE_TITLE, SOCIAL_DESCRIPTION};
use crate::pages::{launchpad::LaunchpadPage, os::OsPage};
use crate::state::{nav::NavState, scroll::ScrollState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="w-full">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let scroll = RwSignal::new(ScrollState::default());
    let nav = RwSignal::new(NavState::default());

    provide_context(scroll);
    provide_context(nav);

    view! {
        <Stylesheet id="leptos" href="/pkg/launchpad.css"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>
        <Meta property="og:title" content=SITE_TITLE/>
        <Meta property="og:description" content=SOCIAL_DESCRIPTION/>
        <Meta property="og:type" content="website"/>
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=SITE_TITLE/>
        <Meta name="twitter:description" content=SOCIAL_DESCRIPTION/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LaunchpadPage/>
                <Route path=StaticSegment("os") view=OsPage/>
            </Routes>
        </Router>
    }
}
