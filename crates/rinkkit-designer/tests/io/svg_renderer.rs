use rinkkit_designer::{
    render_document, render_element, ElementId, Placement, Preview, Point, RenderOptions,
    RinkDiagramData, RinkElement, RinkType,
};

fn pylon(id: &str, x: f64) -> RinkElement {
    RinkElement::Pylon(Placement {
        id: ElementId::new(id),
        x,
        y: 40.0,
    })
}

#[test]
fn test_background_for_each_rink() {
    for rink in RinkType::ALL {
        let svg = render_document(&RinkDiagramData::new(rink), &RenderOptions::export()).to_string();
        let (w, h) = rink.dimensions();
        assert!(svg.contains(&format!("viewBox=\"0 0 {} {}\"", w, h)), "{}", rink);
        assert!(svg.contains("rink-background"));
    }
}

#[test]
fn test_interactive_document() {
    let mut data = RinkDiagramData::new(RinkType::Full);
    data.elements = vec![pylon("p1", 10.0), pylon("p2", 60.0)];
    let options = RenderOptions {
        interactive: true,
        selection: Some(ElementId::new("p2")),
        preview: Some(Preview::Arrow {
            start: Point::new(0.0, 0.0),
            current: Point::new(30.0, 30.0),
        }),
    };
    let svg = render_document(&data, &options).to_string();
    assert!(svg.contains("data-element-id=\"p1\""));
    assert!(svg.contains("data-element-id=\"p2\""));
    assert_eq!(svg.matches("class=\"selection\"").count(), 1);
    assert!(svg.contains("id=\"preview\""));
    // Insertion order survives within a layer.
    assert!(svg.find("\"p1\"").unwrap() < svg.find("\"p2\"").unwrap());
}

#[test]
fn test_stroke_preview_is_polyline() {
    let options = RenderOptions {
        preview: Some(Preview::Stroke(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
        ])),
        ..RenderOptions::default()
    };
    let svg = render_document(&RinkDiagramData::default(), &options).to_string();
    assert!(svg.contains("points=\"0,0 4,4\""));
}

#[test]
fn test_element_group_class() {
    let svg = render_element(&pylon("p", 5.0), false, false).to_string();
    assert!(svg.contains("element-pylon"));
}
