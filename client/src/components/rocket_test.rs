use super::*;

#[test]
fn hull_style_empty_until_glow_is_bright() {
    assert_eq!(hull_style(0.0), "");
    assert_eq!(hull_style(0.3), "");
    assert!(hull_style(0.5).starts_with("filter: drop-shadow("));
}

#[test]
fn flame_style_reflects_height_and_blur() {
    assert_eq!(flame_style(0.0), "height: 28.00px; filter: blur(1.00px);");
    assert_eq!(flame_style(1.0), "height: 76.00px; filter: blur(2.00px);");
}

#[test]
fn plume_style_uses_glow_as_opacity() {
    assert_eq!(plume_style(0.5), "height: 72.00px; opacity: 0.500;");
}

#[test]
fn dock_style_positions_from_bottom_and_hides_on_narrow_viewports() {
    assert_eq!(dock_style(5.0, true), "bottom: 5.000%; display: block;");
    assert_eq!(dock_style(90.0, false), "bottom: 90.000%; display: none;");
}

#[test]
fn display_style_uses_requested_layout_when_visible() {
    assert_eq!(display_style(true, "flex"), "display: flex;");
    assert_eq!(display_style(false, "flex"), "display: none;");
}
