//! Content panes of the OS shell, one per `ContentView`.
//!
//! Panes are stateless and render only static copy from `crate::content`.

#[cfg(all(test, feature = "ssr"))]
#[path = "os_views_test.rs"]
mod os_views_test;

use leptos::prelude::*;

use crate::content::{AUDIENCES, BENEFITS, CREDIT_LINE, PROBLEMS, PROGRAM_FEATURES, WAITLIST_URL, team_json};
use crate::state::nav::ContentView;

/// Render the pane for `view`. Every variant maps to exactly one pane.
pub fn render_view(view: ContentView) -> AnyView {
    match view {
        ContentView::Overview => view! { <OverviewPane/> }.into_any(),
        ContentView::ProblemLog => view! { <ProblemLogPane/> }.into_any(),
        ContentView::SolutionDoc => view! { <SolutionDocPane/> }.into_any(),
        ContentView::ProgramListing => view! { <ProgramListingPane/> }.into_any(),
        ContentView::TeamJson => view! { <TeamJsonPane/> }.into_any(),
        ContentView::AudienceList => view! { <AudienceListPane/> }.into_any(),
        ContentView::WaitlistScript => view! { <WaitlistScriptPane/> }.into_any(),
    }
}

#[component]
fn OverviewPane() -> impl IntoView {
    view! {
        <div class="pane pane--overview" data-view="overview">
            <pre class="pane__banner">"STRATEGY LAUNCHPAD // FILECOIN ECOSYSTEM"</pre>
            <p class="pane__lead">"Without strategy, even the best technology ends up invisible."</p>
            <p class="pane__text">
                "Strategic clarity for Filecoin ecosystem teams. Turn technical excellence into market traction."
            </p>
            <p class="pane__hint">"Select a file on the left to continue."</p>
        </div>
    }
}

#[component]
fn ProblemLogPane() -> impl IntoView {
    view! {
        <div class="pane pane--log" data-view="problem-log">
            {PROBLEMS
                .iter()
                .enumerate()
                .map(|(i, problem)| {
                    view! {
                        <div class="log-line">
                            <span class="log-line__level">{format!("[WARN {:02}]", i + 1)}</span>
                            <span class="log-line__main">{problem.main}</span>
                            <span class="log-line__sub">{format!("  ↳ {}", problem.sub)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SolutionDocPane() -> impl IntoView {
    view! {
        <div class="pane pane--doc" data-view="solution-doc">
            <h2 class="pane__heading">"# Strategic clarity is the missing layer in the Filecoin stack."</h2>
            <p class="pane__text">"Get this right, and everything else gets easier:"</p>
            <ul class="pane__list">
                {BENEFITS
                    .iter()
                    .map(|benefit| {
                        view! {
                            <li>
                                <span class="pane__icon">{benefit.icon}</span>
                                <strong>{benefit.title}</strong>
                                " — "
                                {benefit.desc}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ProgramListingPane() -> impl IntoView {
    view! {
        <div class="pane pane--listing" data-view="program-listing">
            <p class="pane__muted">{format!("total {}", PROGRAM_FEATURES.len())}</p>
            {PROGRAM_FEATURES
                .iter()
                .map(|feature| {
                    view! {
                        <div class="listing-row">
                            <span class="listing-row__perm">"-rw-r--r--"</span>
                            <span class="listing-row__file">{feature.file}</span>
                            <span class="listing-row__title">{feature.title}</span>
                            <span class="listing-row__desc">{feature.desc}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TeamJsonPane() -> impl IntoView {
    view! {
        <div class="pane pane--json" data-view="team-json">
            <pre class="pane__code">{team_json()}</pre>
            <p class="pane__muted">{CREDIT_LINE}</p>
        </div>
    }
}

#[component]
fn AudienceListPane() -> impl IntoView {
    view! {
        <div class="pane pane--list" data-view="audience-list">
            {AUDIENCES.iter().map(|tag| view! { <p class="pane__row">{format!("> {tag}")}</p> }).collect_view()}
        </div>
    }
}

#[component]
fn WaitlistScriptPane() -> impl IntoView {
    view! {
        <div class="pane pane--script" data-view="waitlist-script">
            <p class="pane__muted">"#!/bin/sh"</p>
            <p class="pane__text">"echo \"Welcome to strategic clarity.\""</p>
            <p class="pane__text">"open \"$WAITLIST\""</p>
            <a class="btn btn--primary" href=WAITLIST_URL target="_blank" rel="noopener noreferrer">
                "Join the waitlist →"
            </a>
        </div>
    }
}
