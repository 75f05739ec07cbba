use leptos::prelude::*;

use super::*;
use crate::state::nav::{NAV_ITEMS, NavState};

fn render_html(view: ContentView) -> String {
    let owner = Owner::new();
    owner.with(|| render_view(view).to_html())
}

fn pane_markers(html: &str) -> Vec<&str> {
    html.split("data-view=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

fn expected_pane(id: &str) -> &'static str {
    match id {
        "home" => "overview",
        "problem" => "problem-log",
        "solution" => "solution-doc",
        "program" => "program-listing",
        "team" => "team-json",
        "audience" => "audience-list",
        "waitlist" => "waitlist-script",
        other => panic!("unexpected nav id {other}"),
    }
}

#[test]
fn each_tab_renders_only_its_own_pane() {
    for item in NAV_ITEMS {
        let mut state = NavState::default();
        state.navigate(item.id);
        let html = render_html(state.content_view());
        assert_eq!(pane_markers(&html), vec![expected_pane(item.id)], "tab {}", item.id);
    }
}

#[test]
fn unknown_tab_renders_overview_pane() {
    let mut state = NavState::default();
    state.navigate("does-not-exist");
    let html = render_html(state.content_view());
    assert_eq!(pane_markers(&html), vec!["overview"]);
}

#[test]
fn waitlist_pane_links_out_in_new_tab() {
    let html = render_html(ContentView::WaitlistScript);
    assert!(html.contains(WAITLIST_URL));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
}
