use rinkkit_designer::{Point, RinkType, Viewport};

#[test]
fn test_viewport_default_is_full_rink() {
    let vp = Viewport::default();
    assert_eq!(vp.logical_size(), (800.0, 340.0));
    assert_eq!(vp.display_size(), (800.0, 340.0));
}

#[test]
fn test_viewport_enlarged_display() {
    let mut vp = Viewport::new(RinkType::Half);
    vp.set_display_rect(0.0, 0.0, 800.0, 680.0);
    assert_eq!(vp.scale(), (0.5, 0.5));
    assert_eq!(vp.pixel_to_world(400.0, 340.0), Point::new(200.0, 170.0));
}

#[test]
fn test_viewport_display_string() {
    let mut vp = Viewport::new(RinkType::Quarter);
    vp.set_display_rect(12.0, 8.0, 200.0, 85.0);
    assert_eq!(vp.to_string(), "400x170 shown at (12.0, 8.0) 200.0x85.0");
}
