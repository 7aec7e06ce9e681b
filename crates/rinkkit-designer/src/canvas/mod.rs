//! Canvas for placing and manipulating rink diagram elements.
//!
//! The canvas owns the element collection, the selection, the in-progress
//! gesture and the undo history for one editing session. All coordinates it
//! receives are logical; screen mapping happens in [`crate::viewport`].

mod operations;
mod types;

pub use types::Preview;
pub(crate) use types::{DragState, Gesture};

use rinkkit_core::constants::DIAGRAM_VERSION;
use rinkkit_settings::EditorConfig;

use crate::history::SnapshotHistory;
use crate::model::{
    ArrowVariant, ElementId, IdGenerator, Point, RinkDiagramData, RinkElement, RinkType,
};
use crate::tools::Tool;

/// Canvas state: elements, tool, selection, gesture and history.
#[derive(Debug, Clone)]
pub struct Canvas {
    rink_type: RinkType,
    version: u32,
    elements: Vec<RinkElement>,
    tool: Tool,
    selection: Option<ElementId>,
    gesture: Gesture,
    pointer: Option<Point>,
    history: SnapshotHistory,
    ids: IdGenerator,
    config: EditorConfig,
}

impl Canvas {
    /// Creates an empty full-rink canvas with default settings.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Creates an empty canvas using `config` for tolerances, history depth
    /// and colours. The rink comes from `config.default_rink_type`.
    pub fn with_config(config: EditorConfig) -> Self {
        let rink_type = config.default_rink_type.parse().unwrap_or_default();
        Self {
            rink_type,
            version: DIAGRAM_VERSION,
            elements: Vec::new(),
            tool: Tool::Select,
            selection: None,
            gesture: Gesture::Idle,
            pointer: None,
            history: SnapshotHistory::new(config.history_limit),
            ids: IdGenerator::new(),
            config,
        }
    }

    /// Creates a canvas showing a previously saved diagram.
    pub fn from_data(data: RinkDiagramData, config: EditorConfig) -> Self {
        let mut canvas = Self::with_config(config);
        canvas.load(data);
        canvas
    }

    /// Replaces the whole editing state with `data`. History is cleared.
    pub fn load(&mut self, data: RinkDiagramData) {
        let data = data.normalized();
        self.rink_type = data.rink_type;
        self.version = data.version;
        self.elements = data.elements;
        self.selection = None;
        self.gesture = Gesture::Idle;
        self.history.clear();
        tracing::debug!(
            "Loaded {} diagram with {} element(s)",
            self.rink_type,
            self.elements.len()
        );
    }

    /// Snapshot of the current diagram. The caller owns the copy.
    pub fn diagram_data(&self) -> RinkDiagramData {
        let (width, height) = self.rink_type.dimensions();
        RinkDiagramData {
            rink_type: self.rink_type,
            width,
            height,
            elements: self.elements.clone(),
            version: self.version,
        }
    }

    pub fn rink_type(&self) -> RinkType {
        self.rink_type
    }

    /// Switches the rink background. Elements are left exactly where they are.
    /// Returns `true` when the type actually changed.
    pub fn set_rink_type(&mut self, rink_type: RinkType) -> bool {
        if self.rink_type == rink_type {
            return false;
        }
        tracing::debug!("Rink type {} -> {}", self.rink_type, rink_type);
        self.rink_type = rink_type;
        true
    }

    /// Logical (width, height) of the surface.
    pub fn dimensions(&self) -> (f64, f64) {
        self.rink_type.dimensions()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Sets the active tool. Any pending gesture is abandoned, and the
    /// selection is dropped when leaving the select tool.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }
        self.abandon_gesture();
        if tool != Tool::Select {
            self.selection = None;
        }
        self.tool = tool;
    }

    pub fn elements(&self) -> &[RinkElement] {
        &self.elements
    }

    /// Returns the number of elements on the canvas.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn element(&self, id: &ElementId) -> Option<&RinkElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn selection(&self) -> Option<&ElementId> {
        self.selection.as_ref()
    }

    /// Selects an element by id. Returns `false` if no such element exists.
    pub fn select(&mut self, id: &ElementId) -> bool {
        if self.element(id).is_some() {
            self.selection = Some(id.clone());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Whether a multi-event gesture is waiting for its next event.
    pub fn has_pending_gesture(&self) -> bool {
        !matches!(self.gesture, Gesture::Idle)
    }

    /// Overlay for an uncommitted arrow or freehand stroke.
    pub fn preview(&self) -> Option<Preview> {
        match &self.gesture {
            Gesture::ArrowStart(start) => self.pointer.map(|current| Preview::Arrow {
                start: *start,
                current,
            }),
            Gesture::Stroke(points) if !points.is_empty() => Some(Preview::Stroke(points.clone())),
            _ => None,
        }
    }

    pub(crate) fn arrow_color(&self, variant: Option<ArrowVariant>) -> String {
        let palette = &self.config.palette;
        let color = match variant {
            None | Some(ArrowVariant::Skate | ArrowVariant::SkatePuck | ArrowVariant::Lateral) => {
                &palette.primary
            }
            Some(ArrowVariant::Backward | ArrowVariant::BackwardPuck) => &palette.backward,
            Some(ArrowVariant::Pass) => &palette.pass,
            Some(ArrowVariant::Shot) => &palette.shot,
        };
        color.clone()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
