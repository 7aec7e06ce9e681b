//! Diagram element model.
//!
//! Everything a user can place on the rink is one [`RinkElement`] variant.
//! Elements are plain data: renderers, hit-testing and the canvas all
//! dispatch on the variant instead of going through trait objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

mod element;
mod rink;

pub use element::{
    Arrow, ArrowStyle, ArrowVariant, DashPattern, DrawLayer, ElementKind, Freehand, Marker,
    MarkerType, Placement, RinkElement,
};
pub use rink::{RinkDiagramData, RinkType};

/// A position in the canvas's logical coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1).
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Opaque, stable identifier of a placed element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Issues element ids for one canvas instance.
///
/// Per-canvas id source. Ids combine the element kind with a random UUID.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    issued: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a new unique ID.
    pub fn next_id(&mut self, kind: ElementKind) -> ElementId {
        self.issued += 1;
        ElementId(format!("{}-{}", kind, Uuid::new_v4().simple()))
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}
