use super::*;

#[test]
fn format_zero_pads_each_field() {
    let t = ClockTime { hours: 7, minutes: 5, seconds: 9 };
    assert_eq!(t.format(), "07:05:09");
}

#[test]
fn format_keeps_two_digit_fields() {
    let t = ClockTime { hours: 23, minutes: 59, seconds: 58 };
    assert_eq!(t.format(), "23:59:58");
}

#[test]
fn format_clock_uses_placeholder_before_first_tick() {
    assert_eq!(format_clock(None), CLOCK_PLACEHOLDER);
    assert_eq!(format_clock(Some(ClockTime { hours: 0, minutes: 0, seconds: 0 })), "00:00:00");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn now_is_none_outside_the_browser() {
    assert_eq!(ClockTime::now(), None);
}
