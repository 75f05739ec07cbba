use super::*;

#[test]
fn scroll_progress_is_ratio_of_offset_to_scrollable_distance() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_clamps_overscroll() {
    assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
}

#[test]
fn scroll_progress_is_zero_when_page_fits_viewport() {
    assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
}

#[test]
fn scroll_progress_ignores_non_finite_measurements() {
    assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(100.0, f64::INFINITY, 1000.0), 0.0);
}

#[test]
fn desktop_width_threshold_is_inclusive() {
    assert!(!is_desktop_width(1279.0));
    assert!(is_desktop_width(1280.0));
    assert!(is_desktop_width(1920.0));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_readers_report_none_without_a_window() {
    assert_eq!(read_scroll_progress(), None);
    assert_eq!(read_viewport_width(), None);
}
