//! Tool modes and the toolbar model.
//!
//! Tools are mutually exclusive. The toolbar and single-key shortcuts are two
//! ways of selecting one; both end up in [`crate::Canvas::set_tool`].

use rinkkit_core::DiagramError;
use std::fmt;
use std::str::FromStr;

use crate::model::{ArrowVariant, MarkerType};

/// Active canvas tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Select,
    Marker(MarkerType),
    Puck,
    Pylon,
    Net,
    /// Two-click arrow of a semantic variant.
    Arrow(ArrowVariant),
    /// Legacy plain dashed arrow without a variant.
    ArrowDashed,
    Freehand {
        arrow_end: bool,
    },
    Eraser,
}

impl Tool {
    pub fn is_arrow(self) -> bool {
        matches!(self, Tool::Arrow(_) | Tool::ArrowDashed)
    }

    /// Tools that create an element from a single pointer-down.
    pub fn is_placement(self) -> bool {
        matches!(self, Tool::Marker(_) | Tool::Puck | Tool::Pylon | Tool::Net)
    }

    /// Single-key toolbar shortcut.
    pub fn from_shortcut(key: char) -> Option<Tool> {
        let tool = match key.to_ascii_lowercase() {
            'v' => Tool::Select,
            'x' => Tool::Marker(MarkerType::X),
            'o' => Tool::Marker(MarkerType::O),
            'g' => Tool::Marker(MarkerType::G),
            'c' => Tool::Marker(MarkerType::C),
            'p' => Tool::Puck,
            'y' => Tool::Pylon,
            'n' => Tool::Net,
            'a' => Tool::Arrow(ArrowVariant::Skate),
            's' => Tool::Arrow(ArrowVariant::Shot),
            'd' => Tool::Arrow(ArrowVariant::Pass),
            'f' => Tool::Freehand { arrow_end: false },
            'e' => Tool::Eraser,
            _ => return None,
        };
        Some(tool)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Select => f.write_str("select"),
            Tool::Marker(m) => write!(f, "marker_{}", m.letter()),
            Tool::Puck => f.write_str("puck"),
            Tool::Pylon => f.write_str("pylon"),
            Tool::Net => f.write_str("net"),
            Tool::Arrow(v) => write!(f, "arrow_{}", v.as_str()),
            Tool::ArrowDashed => f.write_str("arrow_dashed"),
            Tool::Freehand { arrow_end: false } => f.write_str("freehand"),
            Tool::Freehand { arrow_end: true } => f.write_str("freehand_arrow"),
            Tool::Eraser => f.write_str("eraser"),
        }
    }
}

impl FromStr for Tool {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || DiagramError::UnknownTool {
            value: s.to_string(),
        };
        let tool = match s {
            "select" => Tool::Select,
            "puck" => Tool::Puck,
            "pylon" => Tool::Pylon,
            "net" => Tool::Net,
            "eraser" => Tool::Eraser,
            "freehand" => Tool::Freehand { arrow_end: false },
            "freehand_arrow" => Tool::Freehand { arrow_end: true },
            "arrow_solid" => Tool::Arrow(ArrowVariant::Skate),
            "arrow_dashed" => Tool::ArrowDashed,
            other => {
                if let Some(letter) = other.strip_prefix("marker_") {
                    Tool::Marker(MarkerType::from_letter(letter).ok_or_else(unknown)?)
                } else if let Some(name) = other.strip_prefix("arrow_") {
                    Tool::Arrow(ArrowVariant::from_name(name).ok_or_else(unknown)?)
                } else {
                    return Err(unknown());
                }
            }
        };
        Ok(tool)
    }
}

/// Toolbar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolGroup {
    Edit,
    Players,
    Equipment,
    Arrows,
    Drawing,
}

/// One toolbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarItem {
    pub tool: Tool,
    pub group: ToolGroup,
    pub label: &'static str,
    pub shortcut: Option<char>,
}

fn item(tool: Tool, group: ToolGroup, label: &'static str, shortcut: Option<char>) -> ToolbarItem {
    ToolbarItem {
        tool,
        group,
        label,
        shortcut,
    }
}

/// Toolbar buttons in display order.
pub fn toolbar() -> Vec<ToolbarItem> {
    use ToolGroup::*;
    vec![
        item(Tool::Select, Edit, "Select", Some('v')),
        item(Tool::Eraser, Edit, "Eraser", Some('e')),
        item(Tool::Marker(MarkerType::X), Players, "Forward (X)", Some('x')),
        item(Tool::Marker(MarkerType::O), Players, "Defense (O)", Some('o')),
        item(Tool::Marker(MarkerType::G), Players, "Goalie (G)", Some('g')),
        item(Tool::Marker(MarkerType::C), Players, "Cone (C)", Some('c')),
        item(Tool::Puck, Equipment, "Puck", Some('p')),
        item(Tool::Pylon, Equipment, "Pylon", Some('y')),
        item(Tool::Net, Equipment, "Net", Some('n')),
        item(Tool::Arrow(ArrowVariant::Skate), Arrows, "Skate", Some('a')),
        item(
            Tool::Arrow(ArrowVariant::SkatePuck),
            Arrows,
            "Skate with puck",
            None,
        ),
        item(Tool::Arrow(ArrowVariant::Backward), Arrows, "Backward", None),
        item(
            Tool::Arrow(ArrowVariant::BackwardPuck),
            Arrows,
            "Backward with puck",
            None,
        ),
        item(Tool::Arrow(ArrowVariant::Pass), Arrows, "Pass", Some('d')),
        item(Tool::Arrow(ArrowVariant::Shot), Arrows, "Shot", Some('s')),
        item(Tool::Arrow(ArrowVariant::Lateral), Arrows, "Lateral", None),
        item(Tool::ArrowDashed, Arrows, "Dashed", None),
        item(
            Tool::Freehand { arrow_end: false },
            Drawing,
            "Freehand",
            Some('f'),
        ),
        item(
            Tool::Freehand { arrow_end: true },
            Drawing,
            "Freehand arrow",
            None,
        ),
    ]
}
