use rinkkit_core::constants::{self, palette};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ElementId, Point};

/// Player role drawn by a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerType {
    /// Forward / offence
    X,
    /// Defence
    O,
    /// Goalie
    G,
    /// Cone or drill marker
    C,
}

impl MarkerType {
    pub const ALL: [MarkerType; 4] = [MarkerType::X, MarkerType::O, MarkerType::G, MarkerType::C];

    pub fn letter(self) -> &'static str {
        match self {
            MarkerType::X => "X",
            MarkerType::O => "O",
            MarkerType::G => "G",
            MarkerType::C => "C",
        }
    }

    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "X" | "x" => Some(MarkerType::X),
            "O" | "o" => Some(MarkerType::O),
            "G" | "g" => Some(MarkerType::G),
            "C" | "c" => Some(MarkerType::C),
            _ => None,
        }
    }
}

/// Legacy arrow line style, kept for diagrams saved before variants existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowStyle {
    #[default]
    Solid,
    Dashed,
}

impl ArrowStyle {
    pub fn dash_pattern(self) -> DashPattern {
        match self {
            ArrowStyle::Solid => DashPattern::Solid,
            ArrowStyle::Dashed => DashPattern::Short,
        }
    }
}

/// Stroke dash pattern used by arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashPattern {
    Solid,
    Long,
    Short,
}

impl DashPattern {
    /// SVG `stroke-dasharray` value, `None` for a solid stroke.
    pub fn dasharray(self) -> Option<&'static str> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Long => Some("12 6"),
            DashPattern::Short => Some("4 4"),
        }
    }
}

/// Semantic arrow sub-type. Drives dash pattern, colour, width and decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowVariant {
    Skate,
    SkatePuck,
    Backward,
    BackwardPuck,
    Pass,
    Shot,
    Lateral,
}

impl ArrowVariant {
    pub const ALL: [ArrowVariant; 7] = [
        ArrowVariant::Skate,
        ArrowVariant::SkatePuck,
        ArrowVariant::Backward,
        ArrowVariant::BackwardPuck,
        ArrowVariant::Pass,
        ArrowVariant::Shot,
        ArrowVariant::Lateral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArrowVariant::Skate => "skate",
            ArrowVariant::SkatePuck => "skate_puck",
            ArrowVariant::Backward => "backward",
            ArrowVariant::BackwardPuck => "backward_puck",
            ArrowVariant::Pass => "pass",
            ArrowVariant::Shot => "shot",
            ArrowVariant::Lateral => "lateral",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == name)
    }

    pub fn dash_pattern(self) -> DashPattern {
        match self {
            ArrowVariant::Backward | ArrowVariant::BackwardPuck => DashPattern::Long,
            ArrowVariant::Pass => DashPattern::Short,
            ArrowVariant::Skate
            | ArrowVariant::SkatePuck
            | ArrowVariant::Shot
            | ArrowVariant::Lateral => DashPattern::Solid,
        }
    }

    /// Legacy style recorded alongside the variant.
    pub fn style(self) -> ArrowStyle {
        match self.dash_pattern() {
            DashPattern::Solid => ArrowStyle::Solid,
            DashPattern::Long | DashPattern::Short => ArrowStyle::Dashed,
        }
    }

    pub fn default_color(self) -> &'static str {
        match self {
            ArrowVariant::Skate | ArrowVariant::SkatePuck | ArrowVariant::Lateral => {
                palette::PRIMARY
            }
            ArrowVariant::Backward | ArrowVariant::BackwardPuck => palette::BACKWARD,
            ArrowVariant::Pass => palette::PASS,
            ArrowVariant::Shot => palette::SHOT,
        }
    }

    /// Width override stored on new arrows. Only shots are drawn thicker.
    pub fn stroke_width_override(self) -> Option<f64> {
        match self {
            ArrowVariant::Shot => Some(constants::SHOT_ARROW_WIDTH),
            _ => None,
        }
    }

    pub fn has_puck(self) -> bool {
        matches!(self, ArrowVariant::SkatePuck | ArrowVariant::BackwardPuck)
    }

    pub fn is_zigzag(self) -> bool {
        self == ArrowVariant::Lateral
    }
}

impl fmt::Display for ArrowVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub marker_type: MarkerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrow {
    pub id: ElementId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(default)]
    pub style: ArrowStyle,
    /// Absent on diagrams saved before variants existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ArrowVariant>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

impl Arrow {
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn length(&self) -> f64 {
        self.start().distance_to(&self.end())
    }

    pub fn dash_pattern(&self) -> DashPattern {
        match self.variant {
            Some(variant) => variant.dash_pattern(),
            None => self.style.dash_pattern(),
        }
    }

    pub fn effective_stroke_width(&self) -> f64 {
        self.stroke_width.unwrap_or(constants::DEFAULT_ARROW_WIDTH)
    }

    pub fn has_puck(&self) -> bool {
        self.variant.is_some_and(ArrowVariant::has_puck)
    }

    pub fn is_zigzag(&self) -> bool {
        self.variant.is_some_and(ArrowVariant::is_zigzag)
    }
}

/// Position-only element (puck, pylon, net).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freehand {
    pub id: ElementId,
    pub points: Vec<Point>,
    pub color: String,
    #[serde(default)]
    pub arrow_end: bool,
}

/// Discriminant of [`RinkElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Marker,
    Arrow,
    Puck,
    Pylon,
    Net,
    Freehand,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Marker => "marker",
            ElementKind::Arrow => "arrow",
            ElementKind::Puck => "puck",
            ElementKind::Pylon => "pylon",
            ElementKind::Net => "net",
            ElementKind::Freehand => "freehand",
        };
        f.write_str(name)
    }
}

/// Fixed draw layers, bottom to top. Markers stay topmost for legibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawLayer {
    Arrows,
    Freehand,
    Pucks,
    Pylons,
    Nets,
    Markers,
}

impl DrawLayer {
    pub const ALL: [DrawLayer; 6] = [
        DrawLayer::Arrows,
        DrawLayer::Freehand,
        DrawLayer::Pucks,
        DrawLayer::Pylons,
        DrawLayer::Nets,
        DrawLayer::Markers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DrawLayer::Arrows => "arrows",
            DrawLayer::Freehand => "freehand",
            DrawLayer::Pucks => "pucks",
            DrawLayer::Pylons => "pylons",
            DrawLayer::Nets => "nets",
            DrawLayer::Markers => "markers",
        }
    }
}

/// Any element placed on the rink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RinkElement {
    Marker(Marker),
    Arrow(Arrow),
    Puck(Placement),
    Pylon(Placement),
    Net(Placement),
    Freehand(Freehand),
}

impl RinkElement {
    pub fn id(&self) -> &ElementId {
        match self {
            RinkElement::Marker(m) => &m.id,
            RinkElement::Arrow(a) => &a.id,
            RinkElement::Puck(p) | RinkElement::Pylon(p) | RinkElement::Net(p) => &p.id,
            RinkElement::Freehand(f) => &f.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            RinkElement::Marker(_) => ElementKind::Marker,
            RinkElement::Arrow(_) => ElementKind::Arrow,
            RinkElement::Puck(_) => ElementKind::Puck,
            RinkElement::Pylon(_) => ElementKind::Pylon,
            RinkElement::Net(_) => ElementKind::Net,
            RinkElement::Freehand(_) => ElementKind::Freehand,
        }
    }

    pub fn layer(&self) -> DrawLayer {
        match self {
            RinkElement::Arrow(_) => DrawLayer::Arrows,
            RinkElement::Freehand(_) => DrawLayer::Freehand,
            RinkElement::Puck(_) => DrawLayer::Pucks,
            RinkElement::Pylon(_) => DrawLayer::Pylons,
            RinkElement::Net(_) => DrawLayer::Nets,
            RinkElement::Marker(_) => DrawLayer::Markers,
        }
    }

    /// Centre of point-like elements, `None` for arrows and strokes.
    pub fn position(&self) -> Option<Point> {
        match self {
            RinkElement::Marker(m) => Some(Point::new(m.x, m.y)),
            RinkElement::Puck(p) | RinkElement::Pylon(p) | RinkElement::Net(p) => {
                Some(Point::new(p.x, p.y))
            }
            RinkElement::Arrow(_) | RinkElement::Freehand(_) => None,
        }
    }

    /// Moves position and endpoint fields only; id and type never change.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            RinkElement::Marker(m) => {
                m.x += dx;
                m.y += dy;
            }
            RinkElement::Arrow(a) => {
                a.x1 += dx;
                a.y1 += dy;
                a.x2 += dx;
                a.y2 += dy;
            }
            RinkElement::Puck(p) | RinkElement::Pylon(p) | RinkElement::Net(p) => {
                p.x += dx;
                p.y += dy;
            }
            RinkElement::Freehand(f) => {
                for point in &mut f.points {
                    point.x += dx;
                    point.y += dy;
                }
            }
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> RinkElement {
        let mut moved = self.clone();
        moved.translate(dx, dy);
        moved
    }
}
