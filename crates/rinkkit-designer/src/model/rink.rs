use rinkkit_core::constants::DIAGRAM_VERSION;
use rinkkit_core::DiagramError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::RinkElement;

/// Rink background. Each type has a fixed logical canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RinkType {
    #[default]
    Full,
    Half,
    Quarter,
}

impl RinkType {
    pub const ALL: [RinkType; 3] = [RinkType::Full, RinkType::Half, RinkType::Quarter];

    /// Logical (width, height) of the drawing surface.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            RinkType::Full => (800.0, 340.0),
            RinkType::Half => (400.0, 340.0),
            RinkType::Quarter => (400.0, 170.0),
        }
    }

    pub fn width(self) -> f64 {
        self.dimensions().0
    }

    pub fn height(self) -> f64 {
        self.dimensions().1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RinkType::Full => "full",
            RinkType::Half => "half",
            RinkType::Quarter => "quarter",
        }
    }
}

impl fmt::Display for RinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RinkType {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(RinkType::Full),
            "half" => Ok(RinkType::Half),
            "quarter" => Ok(RinkType::Quarter),
            _ => Err(DiagramError::UnknownRinkType {
                value: s.to_string(),
            }),
        }
    }
}

fn default_version() -> u32 {
    DIAGRAM_VERSION
}

/// Serializable snapshot handed to hosts.
///
/// Element order is insertion order; renderers group it further by
/// [`super::DrawLayer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RinkDiagramData {
    pub rink_type: RinkType,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub elements: Vec<RinkElement>,
    #[serde(default = "default_version")]
    pub version: u32,
}

impl RinkDiagramData {
    /// Empty diagram for the given rink.
    pub fn new(rink_type: RinkType) -> Self {
        let (width, height) = rink_type.dimensions();
        Self {
            rink_type,
            width,
            height,
            elements: Vec::new(),
            version: DIAGRAM_VERSION,
        }
    }

    /// Copy with width/height forced to the rink type's fixed dimensions.
    pub fn normalized(mut self) -> Self {
        let (width, height) = self.rink_type.dimensions();
        self.width = width;
        self.height = height;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, DiagramError> {
        serde_json::from_str(json).map_err(|e| DiagramError::InvalidData {
            reason: e.to_string(),
        })
    }

    pub fn to_json(&self) -> String {
        // Only derived impls with string keys are involved, serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Checks invariants a host-supplied payload might violate.
    pub fn validate(&self) -> Result<(), DiagramError> {
        let mut seen = HashSet::new();
        for element in &self.elements {
            if !seen.insert(element.id()) {
                return Err(DiagramError::DuplicateId {
                    id: element.id().to_string(),
                });
            }
            if let RinkElement::Freehand(stroke) = element {
                if stroke.points.len() < 2 {
                    return Err(DiagramError::DegenerateStroke {
                        id: stroke.id.to_string(),
                        count: stroke.points.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for RinkDiagramData {
    fn default() -> Self {
        Self::new(RinkType::Full)
    }
}
