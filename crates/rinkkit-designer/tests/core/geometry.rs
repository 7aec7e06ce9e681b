use rinkkit_designer::geometry::{arrowhead, zigzag_points};
use rinkkit_designer::{
    chaikin_smooth, decimate_points, hit_test, nearest_element_within, Arrow, ArrowStyle,
    ElementId, Freehand, Placement, Point, RinkElement,
};

fn arrow(x1: f64, y1: f64, x2: f64, y2: f64) -> RinkElement {
    RinkElement::Arrow(Arrow {
        id: ElementId::new("arrow-a"),
        x1,
        y1,
        x2,
        y2,
        style: ArrowStyle::Solid,
        variant: None,
        color: "#000000".to_string(),
        stroke_width: None,
    })
}

#[test]
fn test_arrow_hit_symmetry() {
    let a = arrow(0.0, 0.0, 100.0, 0.0);
    assert!(hit_test(50.0, 5.0, &a, 10.0));
    assert!(hit_test(50.0, -5.0, &a, 10.0));
    assert!(!hit_test(50.0, 50.0, &a, 10.0));
    // Beyond the end the distance is measured to the endpoint.
    assert!(hit_test(105.0, 0.0, &a, 10.0));
    assert!(!hit_test(115.0, 0.0, &a, 10.0));
}

#[test]
fn test_freehand_hit_uses_segments() {
    let stroke = RinkElement::Freehand(Freehand {
        id: ElementId::new("freehand-a"),
        points: vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(50.0, 50.0),
        ],
        color: "#000000".to_string(),
        arrow_end: false,
    });
    assert!(hit_test(52.0, 25.0, &stroke, 5.0));
    assert!(!hit_test(25.0, 25.0, &stroke, 5.0));
}

#[test]
fn test_nearest_prefers_closest_then_first() {
    let near = RinkElement::Puck(Placement {
        id: ElementId::new("near"),
        x: 10.0,
        y: 0.0,
    });
    let far = RinkElement::Puck(Placement {
        id: ElementId::new("far"),
        x: 15.0,
        y: 0.0,
    });
    let twin = RinkElement::Puck(Placement {
        id: ElementId::new("twin"),
        x: 10.0,
        y: 0.0,
    });
    let elements = vec![far, near, twin];
    let hit = nearest_element_within(9.0, 0.0, &elements, 20.0).unwrap();
    assert_eq!(hit.id().as_str(), "near");
    assert!(nearest_element_within(100.0, 100.0, &elements, 20.0).is_none());
}

#[test]
fn test_decimation_keeps_endpoints() {
    let raw: Vec<Point> = (0..=10).map(|i| Point::new(i as f64, 0.0)).collect();
    let kept = decimate_points(&raw, 4.0);
    assert_eq!(kept.first(), Some(&Point::new(0.0, 0.0)));
    assert_eq!(kept.last(), Some(&Point::new(10.0, 0.0)));
    assert!(kept.len() < raw.len());
    assert!(decimate_points(&[], 4.0).is_empty());
}

#[test]
fn test_chaikin_doubles_segments() {
    let pts = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(20.0, 0.0),
    ];
    let once = chaikin_smooth(&pts, 1);
    assert_eq!(once.len(), 2 + 2 * 2);
    assert_eq!(once[0], pts[0]);
    assert_eq!(*once.last().unwrap(), pts[2]);
    assert_eq!(once[1], Point::new(2.5, 2.5));

    let two = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
    assert_eq!(chaikin_smooth(&two, 2), two);
}

#[test]
fn test_arrowhead_points_forward() {
    let head = arrowhead(Point::new(100.0, 0.0), Point::new(0.0, 0.0), 10.0);
    assert_eq!(head[0], Point::new(100.0, 0.0));
    assert!((head[1].x - 90.0).abs() < 1e-9);
    assert!((head[2].x - 90.0).abs() < 1e-9);
    assert!((head[1].y + head[2].y).abs() < 1e-9);
}

#[test]
fn test_zigzag_has_minimum_segments() {
    let short = zigzag_points(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert_eq!(short.len(), 5);
    let long = zigzag_points(Point::new(0.0, 0.0), Point::new(140.0, 0.0));
    assert_eq!(long.len(), 11);
    assert_eq!(long[0], Point::new(0.0, 0.0));
    assert_eq!(long[10], Point::new(140.0, 0.0));
}
