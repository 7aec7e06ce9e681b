//! Canvas type definitions: gesture state and the live preview layer.

use crate::history::Snapshot;
use crate::model::{ElementId, Point, RinkElement};

/// In-progress multi-event interaction.
#[derive(Debug, Clone, Default)]
pub(crate) enum Gesture {
    #[default]
    Idle,
    /// First click of a two-click arrow.
    ArrowStart(Point),
    /// Raw, unsmoothed pointer trail of a freehand stroke.
    Stroke(Vec<Point>),
    /// Select-tool drag of one element.
    Drag(DragState),
}

#[derive(Debug, Clone)]
pub(crate) struct DragState {
    pub(crate) id: ElementId,
    pub(crate) origin: Point,
    /// The element as it was when the drag began.
    pub(crate) pre_image: RinkElement,
    /// Whole collection at drag start; pushed to history on commit.
    pub(crate) snapshot: Snapshot,
}

/// Non-interactive overlay for gestures that have not committed yet.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Dashed line from the recorded start to the pointer.
    Arrow { start: Point, current: Point },
    /// Raw freehand polyline.
    Stroke(Vec<Point>),
}
