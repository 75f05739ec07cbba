use super::*;

/// Cheap deterministic sequence cycling through `[0, 1)`.
fn stepper(step: f64) -> impl FnMut() -> f64 {
    let mut state = 0.0_f64;
    move || {
        state = (state + step).fract();
        state
    }
}

#[test]
fn generate_stars_produces_requested_count_with_sequential_ids() {
    let stars = generate_stars(LAUNCHPAD_STAR_COUNT, stepper(0.137));
    assert_eq!(stars.len(), 120);
    for (i, star) in stars.iter().enumerate() {
        assert_eq!(star.id, i);
    }
}

#[test]
fn generate_stars_stays_within_documented_ranges() {
    for star in generate_stars(500, stepper(0.0731)) {
        assert!((0.0..=100.0).contains(&star.x), "x {}", star.x);
        assert!((0.0..=100.0).contains(&star.y), "y {}", star.y);
        assert!((1.0..=3.0).contains(&star.size), "size {}", star.size);
        assert!((0.2..=0.7).contains(&star.opacity), "opacity {}", star.opacity);
    }
}

#[test]
fn generate_stars_clamps_misbehaving_sources() {
    let mut values = [5.0, -1.0, f64::NAN, 2.0].into_iter().cycle();
    let stars = generate_stars(3, move || values.next().unwrap_or(0.0));
    for star in &stars {
        assert!((0.0..=100.0).contains(&star.x));
        assert!((0.0..=100.0).contains(&star.y));
        assert!((1.0..=3.0).contains(&star.size));
        assert!((0.2..=0.7).contains(&star.opacity));
    }
}

#[test]
fn generate_stars_with_zero_count_is_empty() {
    assert!(generate_stars(0, || 0.5).is_empty());
}

#[test]
fn star_style_positions_by_percent() {
    let star = Star { id: 0, x: 12.5, y: 50.0, size: 2.0, opacity: 0.4 };
    assert_eq!(
        star.style(),
        "left: 12.500%; top: 50.000%; width: 2.00px; height: 2.00px; opacity: 0.400;"
    );
}
