//! SVG renderer for rink diagrams.
//!
//! Pure mapping from diagram state to SVG nodes:
//! - Rink background (ice, boards, lines, circles) per rink type
//! - One group per element, with an optional selection outline
//! - Semantic layers in fixed draw order, markers on top
//! - Live preview overlay for uncommitted gestures
//!
//! Interactive output tags each element with `data-element-id` and adds wide
//! transparent hit regions to freehand strokes. Export output omits both.

use rinkkit_core::constants::{
    palette, ARROWHEAD_SIZE, FREEHAND_HIT_WIDTH, FREEHAND_WIDTH, MARKER_RADIUS, NET_HEIGHT,
    NET_WIDTH, PUCK_RADIUS, PYLON_SIZE,
};
use svg::node::element::{Circle, Group, Line, Path, Polygon, Polyline, Rectangle, Text};
use svg::Document;

use crate::canvas::Preview;
use crate::geometry::{arrowhead, zigzag_points};
use crate::model::{
    Arrow, DrawLayer, ElementId, Freehand, Marker, MarkerType, Point, RinkDiagramData,
    RinkElement, RinkType,
};

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";
const SELECTION_PADDING: f64 = 6.0;
const SELECTION_DASH: &str = "5 3";

/// What to include besides the committed elements.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Tag elements with ids and add hit regions.
    pub interactive: bool,
    /// Element drawn with the selection affordance.
    pub selection: Option<ElementId>,
    /// Uncommitted gesture overlay.
    pub preview: Option<Preview>,
}

impl RenderOptions {
    /// Options for export: no affordances, no hit regions, no preview.
    pub fn export() -> Self {
        Self::default()
    }
}

/// Renders the whole surface as a standalone SVG document sized to the rink.
pub fn render_document(data: &RinkDiagramData, options: &RenderOptions) -> Document {
    let (width, height) = data.rink_type.dimensions();
    let mut document = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
        .add(render_background(data.rink_type));

    for layer in DrawLayer::ALL {
        let mut group = Group::new().set("id", format!("layer-{}", layer.name()));
        for element in data.elements.iter().filter(|e| e.layer() == layer) {
            let selected = options.selection.as_ref() == Some(element.id());
            group = group.add(render_element(element, selected, options.interactive));
        }
        document = document.add(group);
    }

    if let Some(preview) = &options.preview {
        document = document.add(render_preview(preview));
    }
    document
}

/// Serializes `render_document` output to a string.
pub fn render_to_string(data: &RinkDiagramData, options: &RenderOptions) -> String {
    render_document(data, options).to_string()
}

/// Rink background layer.
///
/// Half and quarter rinks show the attacking end of the full-rink markings:
/// the centre red line sits on the left edge and the quarter view keeps only
/// the upper half of that end.
pub fn render_background(rink_type: RinkType) -> Group {
    let (width, height) = rink_type.dimensions();
    let offset_x = match rink_type {
        RinkType::Full => 0.0,
        RinkType::Half | RinkType::Quarter => -RinkType::Full.width() / 2.0,
    };

    let markings = full_rink_markings().set("transform", format!("translate({} 0)", offset_x));

    Group::new()
        .set("id", "rink-background")
        .set("pointer-events", "none")
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", "#ffffff"),
        )
        .add(markings)
}

fn full_rink_markings() -> Group {
    let (w, h) = RinkType::Full.dimensions();
    let cy = h / 2.0;
    let faceoff_y = [cy - 88.0, cy + 88.0];

    let mut group = Group::new().add(
        Rectangle::new()
            .set("x", 2)
            .set("y", 2)
            .set("width", w - 4.0)
            .set("height", h - 4.0)
            .set("rx", 112)
            .set("ry", 112)
            .set("fill", palette::ICE)
            .set("stroke", palette::BOARDS)
            .set("stroke-width", 4),
    );

    for (x, color, stroke_width) in [
        (44.0, palette::RED_LINE, 2.0),
        (w - 44.0, palette::RED_LINE, 2.0),
        (300.0, palette::BLUE_LINE, 8.0),
        (500.0, palette::BLUE_LINE, 8.0),
        (w / 2.0, palette::RED_LINE, 8.0),
    ] {
        group = group.add(
            Line::new()
                .set("x1", x)
                .set("y1", 2)
                .set("x2", x)
                .set("y2", h - 2.0)
                .set("stroke", color)
                .set("stroke-width", stroke_width),
        );
    }

    group = group
        .add(ring(w / 2.0, cy, 60.0, palette::BLUE_LINE))
        .add(dot(w / 2.0, cy, 3.0, palette::BLUE_LINE));

    for x in [124.0, w - 124.0] {
        for y in faceoff_y {
            group = group
                .add(ring(x, y, 60.0, palette::RED_LINE))
                .add(dot(x, y, 4.0, palette::RED_LINE));
        }
    }
    for x in [320.0, 480.0] {
        for y in faceoff_y {
            group = group.add(dot(x, y, 4.0, palette::RED_LINE));
        }
    }

    // Goal creases open toward centre ice.
    group
        .add(crease(44.0, cy, 1.0))
        .add(crease(w - 44.0, cy, -1.0))
}

fn ring(cx: f64, cy: f64, r: f64, color: &str) -> Circle {
    Circle::new()
        .set("cx", cx)
        .set("cy", cy)
        .set("r", r)
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", 2)
}

fn dot(cx: f64, cy: f64, r: f64, color: &str) -> Circle {
    Circle::new()
        .set("cx", cx)
        .set("cy", cy)
        .set("r", r)
        .set("fill", color)
}

fn crease(goal_x: f64, cy: f64, direction: f64) -> Path {
    let r = 24.0;
    let sweep = if direction > 0.0 { 1 } else { 0 };
    Path::new()
        .set(
            "d",
            format!(
                "M {} {} A {} {} 0 0 {} {} {} Z",
                goal_x,
                cy - r,
                r,
                r,
                sweep,
                goal_x,
                cy + r
            ),
        )
        .set("fill", "#bfdbfe")
        .set("fill-opacity", 0.7)
        .set("stroke", palette::RED_LINE)
        .set("stroke-width", 2)
}

/// Renders one element.
pub fn render_element(element: &RinkElement, selected: bool, interactive: bool) -> Group {
    let mut group = Group::new().set("class", format!("element element-{}", element.kind()));
    if interactive {
        group = group.set("data-element-id", element.id().as_str());
    }
    if selected {
        group = group.add(selection_outline(element));
    }

    match element {
        RinkElement::Marker(marker) => render_marker(group, marker),
        RinkElement::Arrow(arrow) => render_arrow(group, arrow),
        RinkElement::Puck(p) => group.add(dot(p.x, p.y, PUCK_RADIUS, palette::PUCK)),
        RinkElement::Pylon(p) => group.add(render_pylon(p.x, p.y)),
        RinkElement::Net(p) => render_net(group, p.x, p.y),
        RinkElement::Freehand(stroke) => render_freehand(group, stroke, interactive),
    }
}

fn render_marker(group: Group, marker: &Marker) -> Group {
    let shape: Box<dyn svg::Node> = match marker.marker_type {
        MarkerType::C => Box::new(
            Polygon::new()
                .set(
                    "points",
                    points_attr(&[
                        Point::new(marker.x, marker.y - MARKER_RADIUS),
                        Point::new(marker.x + MARKER_RADIUS, marker.y + MARKER_RADIUS * 0.8),
                        Point::new(marker.x - MARKER_RADIUS, marker.y + MARKER_RADIUS * 0.8),
                    ]),
                )
                .set("fill", palette::MARKER_FILL)
                .set("stroke", palette::PRIMARY)
                .set("stroke-width", 2),
        ),
        _ => Box::new(
            Circle::new()
                .set("cx", marker.x)
                .set("cy", marker.y)
                .set("r", MARKER_RADIUS)
                .set("fill", palette::MARKER_FILL)
                .set("stroke", palette::PRIMARY)
                .set("stroke-width", 2),
        ),
    };

    let mut group = group.add(shape).add(
        Text::new(marker.marker_type.letter())
            .set("x", marker.x)
            .set("y", marker.y)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", FONT_FAMILY)
            .set("font-size", 14)
            .set("font-weight", "bold")
            .set("fill", palette::PRIMARY),
    );

    if let Some(label) = marker.label.as_deref().filter(|l| !l.is_empty()) {
        group = group.add(
            Text::new(label)
                .set("x", marker.x)
                .set("y", marker.y + MARKER_RADIUS + 12.0)
                .set("text-anchor", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", 11)
                .set("fill", palette::BOARDS),
        );
    }
    group
}

fn render_arrow(group: Group, arrow: &Arrow) -> Group {
    let start = arrow.start();
    let end = arrow.end();
    let width = arrow.effective_stroke_width();
    let head_size = ARROWHEAD_SIZE + width;

    let mut group = if arrow.is_zigzag() {
        let corners = zigzag_points(start, end);
        group.add(
            Polyline::new()
                .set("points", points_attr(&corners))
                .set("fill", "none")
                .set("stroke", arrow.color.as_str())
                .set("stroke-width", width)
                .set("stroke-linejoin", "round"),
        )
    } else {
        let mut line = Line::new()
            .set("x1", start.x)
            .set("y1", start.y)
            .set("x2", end.x)
            .set("y2", end.y)
            .set("stroke", arrow.color.as_str())
            .set("stroke-width", width)
            .set("stroke-linecap", "round");
        if let Some(dash) = arrow.dash_pattern().dasharray() {
            line = line.set("stroke-dasharray", dash);
        }
        group.add(line)
    };

    group = group.add(head_polygon(end, start, head_size, &arrow.color));

    if arrow.has_puck() {
        // Just behind the arrowhead, on the shaft.
        let length = arrow.length();
        let back = head_size + PUCK_RADIUS + 2.0;
        let t = if length > back { 1.0 - back / length } else { 0.0 };
        let at = start.lerp(&end, t);
        group = group.add(dot(at.x, at.y, PUCK_RADIUS, palette::PUCK));
    }
    group
}

fn render_pylon(x: f64, y: f64) -> Polygon {
    let half = PYLON_SIZE / 2.0;
    Polygon::new()
        .set(
            "points",
            points_attr(&[
                Point::new(x, y - half),
                Point::new(x + half, y + half),
                Point::new(x - half, y + half),
            ]),
        )
        .set("fill", palette::PYLON)
        .set("stroke", "#9a3412")
        .set("stroke-width", 1)
}

fn render_net(group: Group, x: f64, y: f64) -> Group {
    let left = x - NET_WIDTH / 2.0;
    let top = y - NET_HEIGHT / 2.0;
    let mut group = group.add(
        Rectangle::new()
            .set("x", left)
            .set("y", top)
            .set("width", NET_WIDTH)
            .set("height", NET_HEIGHT)
            .set("fill", "#ffffff")
            .set("stroke", palette::NET)
            .set("stroke-width", 2),
    );
    // Mesh
    for i in 1..4 {
        let mx = left + NET_WIDTH * i as f64 / 4.0;
        group = group.add(
            Line::new()
                .set("x1", mx)
                .set("y1", top)
                .set("x2", mx)
                .set("y2", top + NET_HEIGHT)
                .set("stroke", palette::NET)
                .set("stroke-width", 0.5),
        );
    }
    group
}

fn render_freehand(group: Group, stroke: &Freehand, interactive: bool) -> Group {
    let d = path_data(&stroke.points);
    let mut group = group;

    if interactive {
        group = group.add(
            Path::new()
                .set("d", d.clone())
                .set("fill", "none")
                .set("stroke", "transparent")
                .set("stroke-width", FREEHAND_HIT_WIDTH)
                .set("stroke-linecap", "round")
                .set("class", "hit-region"),
        );
    }

    group = group.add(
        Path::new()
            .set("d", d)
            .set("fill", "none")
            .set("stroke", stroke.color.as_str())
            .set("stroke-width", FREEHAND_WIDTH)
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round"),
    );

    if stroke.arrow_end {
        if let Some((tip, tail)) = terminal_direction(&stroke.points) {
            group = group.add(head_polygon(
                tip,
                tail,
                ARROWHEAD_SIZE + FREEHAND_WIDTH,
                &stroke.color,
            ));
        }
    }
    group
}

/// Last point and the nearest earlier point distinct from it.
fn terminal_direction(points: &[Point]) -> Option<(Point, Point)> {
    let (tip, rest) = points.split_last()?;
    let tail = rest
        .iter()
        .rev()
        .find(|p| p.distance_to(tip) > f64::EPSILON)?;
    Some((*tip, *tail))
}

fn head_polygon(tip: Point, tail: Point, size: f64, color: &str) -> Polygon {
    Polygon::new()
        .set("points", points_attr(&arrowhead(tip, tail, size)))
        .set("fill", color)
}

/// Dashed accent outline around the element's bounds.
fn selection_outline(element: &RinkElement) -> Box<dyn svg::Node> {
    match element {
        RinkElement::Marker(m) => Box::new(selection_ring(m.x, m.y, MARKER_RADIUS)),
        RinkElement::Puck(p) => Box::new(selection_ring(p.x, p.y, PUCK_RADIUS)),
        RinkElement::Pylon(p) => Box::new(selection_ring(p.x, p.y, PYLON_SIZE * 0.75)),
        RinkElement::Net(p) => Box::new(selection_box(
            p.x - NET_WIDTH / 2.0,
            p.y - NET_HEIGHT / 2.0,
            p.x + NET_WIDTH / 2.0,
            p.y + NET_HEIGHT / 2.0,
        )),
        RinkElement::Arrow(a) => Box::new(selection_box(
            a.x1.min(a.x2),
            a.y1.min(a.y2),
            a.x1.max(a.x2),
            a.y1.max(a.y2),
        )),
        RinkElement::Freehand(f) => {
            let (min_x, min_y, max_x, max_y) = f.points.iter().fold(
                (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
                |(a, b, c, d), p| (a.min(p.x), b.min(p.y), c.max(p.x), d.max(p.y)),
            );
            Box::new(selection_box(min_x, min_y, max_x, max_y))
        }
    }
}

fn selection_ring(cx: f64, cy: f64, r: f64) -> Circle {
    Circle::new()
        .set("cx", cx)
        .set("cy", cy)
        .set("r", r + SELECTION_PADDING)
        .set("fill", "none")
        .set("stroke", palette::SELECTION)
        .set("stroke-width", 2)
        .set("stroke-dasharray", SELECTION_DASH)
        .set("class", "selection")
}

fn selection_box(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Rectangle {
    Rectangle::new()
        .set("x", min_x - SELECTION_PADDING)
        .set("y", min_y - SELECTION_PADDING)
        .set("width", max_x - min_x + SELECTION_PADDING * 2.0)
        .set("height", max_y - min_y + SELECTION_PADDING * 2.0)
        .set("fill", "none")
        .set("stroke", palette::SELECTION)
        .set("stroke-width", 2)
        .set("stroke-dasharray", SELECTION_DASH)
        .set("class", "selection")
}

/// Non-interactive overlay for an arrow or stroke that has not committed.
pub fn render_preview(preview: &Preview) -> Group {
    let group = Group::new()
        .set("id", "preview")
        .set("pointer-events", "none")
        .set("opacity", 0.7);
    match preview {
        Preview::Arrow { start, current } => group.add(
            Line::new()
                .set("x1", start.x)
                .set("y1", start.y)
                .set("x2", current.x)
                .set("y2", current.y)
                .set("stroke", palette::PRIMARY)
                .set("stroke-width", 2)
                .set("stroke-dasharray", "6 4"),
        ),
        Preview::Stroke(points) => group.add(
            Polyline::new()
                .set("points", points_attr(points))
                .set("fill", "none")
                .set("stroke", palette::PRIMARY)
                .set("stroke-width", FREEHAND_WIDTH)
                .set("stroke-linecap", "round"),
        ),
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{} {} {} ", cmd, p.x, p.y));
    }
    d.trim_end().to_string()
}
