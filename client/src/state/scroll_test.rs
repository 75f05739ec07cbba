use super::*;

#[test]
fn scroll_state_default_is_top_of_page_and_not_ready() {
    let state = ScrollState::default();
    assert_eq!(state.progress, 0.0);
    assert!(!state.client_ready);
    assert_eq!(state.viewport_width, 0.0);
}

#[test]
fn set_progress_clamps_into_unit_range() {
    let mut state = ScrollState::default();
    state.set_progress(1.4);
    assert_eq!(state.progress, 1.0);
    state.set_progress(-0.2);
    assert_eq!(state.progress, 0.0);
    state.set_progress(0.25);
    assert_eq!(state.progress, 0.25);
}

#[test]
fn mark_ready_records_width_when_known() {
    let mut state = ScrollState::default();
    state.mark_ready(Some(1440.0));
    assert!(state.client_ready);
    assert_eq!(state.viewport_width, 1440.0);

    let mut state = ScrollState::default();
    state.mark_ready(None);
    assert!(state.client_ready);
    assert_eq!(state.viewport_width, 0.0);
}

#[test]
fn desktop_decor_requires_ready_client_and_wide_viewport() {
    let mut state = ScrollState { viewport_width: 1600.0, ..ScrollState::default() };
    assert!(!state.show_desktop_decor());

    state.mark_ready(None);
    assert!(state.show_desktop_decor());

    state.viewport_width = 1024.0;
    assert!(!state.show_desktop_decor());
}

#[test]
fn flight_tracks_stored_progress() {
    let mut state = ScrollState::default();
    state.set_progress(0.9);
    let flight = state.flight();
    assert!(flight.arrived);
    assert_eq!(flight.atmosphere_opacity, 0.0);
}
