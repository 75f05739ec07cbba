use super::*;

#[test]
fn pill_variant_defaults_to_blue() {
    assert_eq!(PillVariant::default(), PillVariant::Blue);
}

#[test]
fn pill_variant_classes_share_base_and_differ_by_modifier() {
    let classes = [PillVariant::Blue.class(), PillVariant::Red.class(), PillVariant::Green.class()];
    assert!(classes.iter().all(|c| c.starts_with("pill pill--")));
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
    assert_ne!(classes[0], classes[2]);
}
