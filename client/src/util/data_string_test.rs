use super::*;

#[test]
fn generate_honours_length_and_alphabet() {
    let mut state = 0.0_f64;
    let s = generate(64, move || {
        state = (state + 0.173).fract();
        state
    });
    assert_eq!(s.len(), 64);
    assert!(s.bytes().all(|b| DATA_ALPHABET.contains(&b)), "unexpected char in {s}");
}

#[test]
fn generate_maps_unit_edges_to_first_and_last_symbols() {
    assert_eq!(generate(2, || 0.0), "AA");
    assert_eq!(generate(1, || 0.999_999), "9");
    assert_eq!(generate(1, || 1.0), "9");
    assert_eq!(generate(1, || f64::NAN), "A");
}

#[test]
fn chunked_groups_with_dashes() {
    assert_eq!(chunked("AB12CD34", 4), "AB12-CD34");
    assert_eq!(chunked("ABCDE", 2), "AB-CD-E");
    assert_eq!(chunked("ABC", 0), "ABC");
    assert_eq!(chunked("", 4), "");
}

#[test]
fn placeholder_matches_rendered_shape() {
    assert_eq!(placeholder(), "0000-0000");
}
