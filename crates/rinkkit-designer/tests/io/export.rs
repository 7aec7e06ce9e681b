use rinkkit_core::constants::EXPORT_SCALE;
use rinkkit_designer::{
    export_png, export_svg, rasterize, ElementId, Placement, RinkDiagramData, RinkElement,
    RinkType,
};

#[test]
fn test_svg_export_excludes_interaction_markup() {
    let mut data = RinkDiagramData::new(RinkType::Full);
    data.elements.push(RinkElement::Puck(Placement {
        id: ElementId::new("puck-1"),
        x: 400.0,
        y: 170.0,
    }));
    let svg = export_svg(&data);
    assert!(svg.contains("layer-pucks"));
    assert!(!svg.contains("data-element-id"));
    assert!(!svg.contains("hit-region"));
}

#[test]
fn test_raster_is_scaled() {
    let data = RinkDiagramData::new(RinkType::Quarter);
    let image = rasterize(&data, EXPORT_SCALE).unwrap();
    assert_eq!(image.dimensions(), (800, 340));
    // Top-right corner lies outside the rounded boards: plain white.
    assert_eq!(image.get_pixel(799, 0).0, [255, 255, 255, 255]);
}

#[test]
fn test_png_signature() {
    let bytes = export_png(&RinkDiagramData::new(RinkType::Half), 1.0).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
