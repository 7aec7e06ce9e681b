//! Pointer, keyboard-level and history operations for Canvas.
//!
//! Every operation returns `true` only when it committed a mutation. Gestures
//! that degenerate (coincident arrow endpoints, strokes without movement,
//! clicks on empty space) return `false` and leave history untouched.

use rinkkit_core::constants::MIN_ARROW_LENGTH;

use super::{Canvas, DragState, Gesture};
use crate::geometry::{chaikin_smooth, decimate_points, nearest_element_within};
use crate::model::{
    Arrow, ArrowStyle, ArrowVariant, ElementId, ElementKind, Freehand, Marker, MarkerType,
    Placement, Point, RinkElement,
};
use crate::tools::Tool;

impl Canvas {
    /// Handles a pointer press at logical position `p`.
    pub fn pointer_down(&mut self, p: Point) -> bool {
        self.pointer = Some(p);
        match self.tool {
            Tool::Select => {
                self.begin_drag(p);
                false
            }
            Tool::Marker(marker_type) => {
                let element = self.new_marker(p, marker_type);
                self.insert(element)
            }
            Tool::Puck => {
                let element = RinkElement::Puck(self.new_placement(ElementKind::Puck, p));
                self.insert(element)
            }
            Tool::Pylon => {
                let element = RinkElement::Pylon(self.new_placement(ElementKind::Pylon, p));
                self.insert(element)
            }
            Tool::Net => {
                let element = RinkElement::Net(self.new_placement(ElementKind::Net, p));
                self.insert(element)
            }
            Tool::Arrow(variant) => self.arrow_click(p, Some(variant)),
            Tool::ArrowDashed => self.arrow_click(p, None),
            Tool::Freehand { .. } => {
                self.gesture = Gesture::Stroke(vec![p]);
                false
            }
            Tool::Eraser => {
                let threshold = self.config.hit_threshold;
                let hit = nearest_element_within(p.x, p.y, &self.elements, threshold)
                    .map(|e| e.id().clone());
                match hit {
                    Some(id) => self.remove_element(&id),
                    None => false,
                }
            }
        }
    }

    /// Handles pointer motion. Never commits on its own.
    pub fn pointer_move(&mut self, p: Point) {
        self.pointer = Some(p);
        match &mut self.gesture {
            Gesture::Stroke(points) => points.push(p),
            Gesture::Drag(drag) => apply_drag(&mut self.elements, drag, p),
            Gesture::Idle | Gesture::ArrowStart(_) => {}
        }
    }

    /// Handles pointer release, finishing drags and freehand strokes.
    pub fn pointer_up(&mut self, p: Point) -> bool {
        match std::mem::take(&mut self.gesture) {
            Gesture::Drag(drag) => {
                apply_drag(&mut self.elements, &drag, p);
                self.finish_drag(drag)
            }
            Gesture::Stroke(points) => self.finish_stroke(points),
            pending @ Gesture::ArrowStart(_) => {
                self.gesture = pending;
                false
            }
            Gesture::Idle => false,
        }
    }

    /// Pointer left the surface; behaves like a release so no gesture sticks.
    pub fn pointer_leave(&mut self, p: Point) -> bool {
        let committed = self.pointer_up(p);
        self.pointer = None;
        committed
    }

    /// Escape: drops pending arrow/stroke state and the selection.
    /// An in-flight drag snaps back to where it started.
    pub fn cancel(&mut self) {
        self.abandon_gesture();
        self.selection = None;
    }

    /// Deletes the selected element, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.selection.take() {
            Some(id) => self.remove_element(&id),
            None => false,
        }
    }

    /// Removes an element by id.
    pub fn remove_element(&mut self, id: &ElementId) -> bool {
        let Some(index) = self.elements.iter().position(|e| e.id() == id) else {
            return false;
        };
        self.push_history();
        let removed = self.elements.remove(index);
        if self.selection.as_ref() == Some(id) {
            self.selection = None;
        }
        tracing::debug!("Removed {} {}", removed.kind(), id);
        true
    }

    /// Sets or clears the text sub-label of a marker.
    pub fn set_marker_label(&mut self, id: &ElementId, label: Option<String>) -> bool {
        let label = label.filter(|l| !l.trim().is_empty());
        let current = match self.element(id) {
            Some(RinkElement::Marker(m)) => m.label.clone(),
            _ => return false,
        };
        if current == label {
            return false;
        }
        self.push_history();
        if let Some(RinkElement::Marker(m)) = self.elements.iter_mut().find(|e| e.id() == id) {
            m.label = label;
        }
        true
    }

    /// Restores the most recent snapshot.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.elements = snapshot;
        self.selection = None;
        self.gesture = Gesture::Idle;
        tracing::debug!("Undo, {} snapshot(s) left", self.history.len());
        true
    }

    /// Removes every element as one undoable step.
    pub fn clear_all(&mut self) -> bool {
        if self.elements.is_empty() {
            return false;
        }
        self.abandon_gesture();
        self.push_history();
        self.elements.clear();
        self.selection = None;
        tracing::debug!("Cleared canvas");
        true
    }

    pub(crate) fn abandon_gesture(&mut self) {
        if let Gesture::Drag(drag) = std::mem::take(&mut self.gesture) {
            if let Some(slot) = self.elements.iter_mut().find(|e| *e.id() == drag.id) {
                *slot = drag.pre_image;
            }
        }
    }

    fn push_history(&mut self) {
        self.history.push(self.elements.clone());
    }

    fn insert(&mut self, element: RinkElement) -> bool {
        self.push_history();
        tracing::debug!("Placed {} {}", element.kind(), element.id());
        self.elements.push(element);
        true
    }

    fn begin_drag(&mut self, p: Point) {
        let threshold = self.config.hit_threshold;
        let Some(hit) = nearest_element_within(p.x, p.y, &self.elements, threshold).cloned()
        else {
            self.selection = None;
            return;
        };
        let id = hit.id().clone();
        self.selection = Some(id.clone());
        self.gesture = Gesture::Drag(DragState {
            id,
            origin: p,
            pre_image: hit,
            snapshot: self.elements.clone(),
        });
    }

    fn finish_drag(&mut self, drag: DragState) -> bool {
        let unchanged = self
            .element(&drag.id)
            .is_none_or(|current| *current == drag.pre_image);
        if unchanged {
            return false;
        }
        self.history.push(drag.snapshot);
        tracing::debug!("Moved {}", drag.id);
        true
    }

    fn arrow_click(&mut self, p: Point, variant: Option<ArrowVariant>) -> bool {
        let Gesture::ArrowStart(start) = std::mem::take(&mut self.gesture) else {
            self.gesture = Gesture::ArrowStart(p);
            return false;
        };
        if start.distance_to(&p) < MIN_ARROW_LENGTH {
            tracing::debug!("Ignoring zero-length arrow at ({}, {})", p.x, p.y);
            return false;
        }
        let arrow = Arrow {
            id: self.ids.next_id(ElementKind::Arrow),
            x1: start.x,
            y1: start.y,
            x2: p.x,
            y2: p.y,
            style: variant.map_or(ArrowStyle::Dashed, ArrowVariant::style),
            variant,
            color: self.arrow_color(variant),
            stroke_width: variant.and_then(ArrowVariant::stroke_width_override),
        };
        self.insert(RinkElement::Arrow(arrow))
    }

    fn finish_stroke(&mut self, raw: Vec<Point>) -> bool {
        if raw.len() < 2 {
            return false;
        }
        let decimated = decimate_points(&raw, self.config.decimation_distance);
        let points = chaikin_smooth(&decimated, self.config.smoothing_iterations);
        let first = points[0];
        if points.iter().all(|q| q.distance_to(&first) <= f64::EPSILON) {
            return false;
        }
        let arrow_end = matches!(self.tool, Tool::Freehand { arrow_end: true });
        let stroke = Freehand {
            id: self.ids.next_id(ElementKind::Freehand),
            points,
            color: self.config.palette.primary.clone(),
            arrow_end,
        };
        self.insert(RinkElement::Freehand(stroke))
    }

    fn new_marker(&mut self, p: Point, marker_type: MarkerType) -> RinkElement {
        RinkElement::Marker(Marker {
            id: self.ids.next_id(ElementKind::Marker),
            x: p.x,
            y: p.y,
            marker_type,
            label: None,
        })
    }

    fn new_placement(&mut self, kind: ElementKind, p: Point) -> Placement {
        Placement {
            id: self.ids.next_id(kind),
            x: p.x,
            y: p.y,
        }
    }
}

/// Places the dragged element at its pre-drag position offset by the pointer travel.
fn apply_drag(elements: &mut [RinkElement], drag: &DragState, p: Point) {
    let moved = drag
        .pre_image
        .translated(p.x - drag.origin.x, p.y - drag.origin.y);
    if let Some(slot) = elements.iter_mut().find(|e| *e.id() == drag.id) {
        *slot = moved;
    }
}
