use rinkkit_core::constants::{DEFAULT_ARROW_WIDTH, HISTORY_LIMIT};
use rinkkit_designer::{
    ArrowStyle, ArrowVariant, Canvas, DashPattern, MarkerType, Point, RinkElement, RinkType, Tool,
};

fn click(canvas: &mut Canvas, x: f64, y: f64) -> bool {
    let p = Point::new(x, y);
    let down = canvas.pointer_down(p);
    canvas.pointer_up(p) || down
}

fn arrow_with(tool: Tool, from: (f64, f64), to: (f64, f64)) -> RinkElement {
    let mut canvas = Canvas::new();
    canvas.set_tool(tool);
    click(&mut canvas, from.0, from.1);
    assert!(click(&mut canvas, to.0, to.1));
    canvas.elements()[0].clone()
}

#[test]
fn test_place_and_drag_marker() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Marker(MarkerType::X));
    assert!(click(&mut canvas, 100.0, 50.0));
    assert_eq!(canvas.element_count(), 1);
    let id = canvas.elements()[0].id().clone();

    canvas.set_tool(Tool::Select);
    assert!(!canvas.pointer_down(Point::new(100.0, 50.0)));
    canvas.pointer_move(Point::new(150.0, 80.0));
    assert!(canvas.pointer_up(Point::new(150.0, 80.0)));

    let moved = canvas.element(&id).unwrap();
    assert_eq!(moved.position(), Some(Point::new(150.0, 80.0)));
    assert_eq!(canvas.history_len(), 2);

    assert!(canvas.undo());
    assert_eq!(
        canvas.element(&id).unwrap().position(),
        Some(Point::new(100.0, 50.0))
    );
}

#[test]
fn test_shot_arrow_is_solid_and_thick() {
    let shot = arrow_with(Tool::Arrow(ArrowVariant::Shot), (0.0, 0.0), (50.0, 0.0));
    let skate = arrow_with("arrow_solid".parse().unwrap(), (0.0, 0.0), (50.0, 0.0));
    let (RinkElement::Arrow(shot), RinkElement::Arrow(skate)) = (shot, skate) else {
        panic!("expected arrows");
    };
    assert_eq!(shot.variant, Some(ArrowVariant::Shot));
    assert_eq!(shot.style, ArrowStyle::Solid);
    assert!(shot.effective_stroke_width() > skate.effective_stroke_width());
    assert_eq!(skate.effective_stroke_width(), DEFAULT_ARROW_WIDTH);
}

#[test]
fn test_backward_puck_arrow() {
    let element = arrow_with(
        Tool::Arrow(ArrowVariant::BackwardPuck),
        (10.0, 10.0),
        (80.0, 40.0),
    );
    let RinkElement::Arrow(arrow) = element else {
        panic!("expected arrow");
    };
    assert_eq!(arrow.variant, Some(ArrowVariant::BackwardPuck));
    assert_eq!(arrow.dash_pattern(), DashPattern::Long);
    assert!(arrow.has_puck());
    assert_eq!((arrow.x1, arrow.y1, arrow.x2, arrow.y2), (10.0, 10.0, 80.0, 40.0));
}

#[test]
fn test_legacy_dashed_arrow_has_no_variant() {
    let RinkElement::Arrow(arrow) = arrow_with(Tool::ArrowDashed, (0.0, 0.0), (30.0, 30.0)) else {
        panic!("expected arrow");
    };
    assert_eq!(arrow.variant, None);
    assert_eq!(arrow.style, ArrowStyle::Dashed);
    assert_ne!(arrow.dash_pattern(), DashPattern::Solid);
}

#[test]
fn test_rink_switch_preserves_elements() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Puck);
    click(&mut canvas, 600.0, 300.0);
    canvas.set_tool(Tool::Net);
    click(&mut canvas, 760.0, 170.0);
    canvas.set_tool(Tool::Marker(MarkerType::G));
    click(&mut canvas, 740.0, 170.0);
    let before = canvas.diagram_data();

    assert!(canvas.set_rink_type(RinkType::Quarter));
    let after = canvas.diagram_data();
    assert_eq!(after.elements, before.elements);
    assert_eq!((after.width, after.height), (400.0, 170.0));
    assert_eq!(after.rink_type, RinkType::Quarter);
}

#[test]
fn test_thirty_first_undo_is_noop() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Pylon);
    for i in 0..=HISTORY_LIMIT {
        assert!(click(&mut canvas, 10.0 + i as f64 * 20.0, 20.0));
    }
    assert_eq!(canvas.history_len(), HISTORY_LIMIT);

    for _ in 0..HISTORY_LIMIT {
        assert!(canvas.undo());
    }
    assert!(!canvas.undo());
    // The first placement fell out of the buffer and cannot be undone.
    assert_eq!(canvas.element_count(), 1);
}

#[test]
fn test_switching_tool_abandons_arrow() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Arrow(ArrowVariant::Lateral));
    click(&mut canvas, 10.0, 10.0);
    assert!(canvas.has_pending_gesture());
    canvas.set_tool(Tool::Eraser);
    assert!(!canvas.has_pending_gesture());
    assert!(canvas.preview().is_none());
}

#[test]
fn test_load_resets_history() {
    let mut canvas = Canvas::new();
    canvas.set_tool(Tool::Puck);
    click(&mut canvas, 10.0, 10.0);
    let data = canvas.diagram_data();

    let mut other = Canvas::new();
    other.load(data.clone());
    assert_eq!(other.diagram_data(), data);
    assert!(!other.can_undo());
}

#[test]
fn test_palette_drives_arrow_colour() {
    let mut config = rinkkit_settings::EditorConfig::default();
    config.palette.pass = "#00ff00".to_string();
    let mut canvas = Canvas::with_config(config);
    canvas.set_tool(Tool::Arrow(ArrowVariant::Pass));
    click(&mut canvas, 0.0, 0.0);
    click(&mut canvas, 40.0, 0.0);
    let RinkElement::Arrow(arrow) = &canvas.elements()[0] else {
        panic!("expected arrow");
    };
    assert_eq!(arrow.color, "#00ff00");
}
