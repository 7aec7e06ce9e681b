//! Embeddable editor component.
//!
//! `RinkEditor` is what a host page talks to. It wraps a [`Canvas`] with the
//! component contract: optional initial data, an `editable` switch, change and
//! save callbacks, screen-to-logical mapping through the mounted surface, and
//! synchronous accessors for the current diagram and its SVG.
//!
//! Callbacks receive owned snapshots; the editor keeps no reference a host
//! could mutate afterwards.

mod events;
mod file_io;

pub use events::{KeyEvent, PointerEvent, PointerEventKind};

use rinkkit_core::DiagramError;
use rinkkit_settings::EditorConfig;

use crate::canvas::Canvas;
use crate::export;
use crate::model::{ElementId, RinkDiagramData, RinkType};
use crate::svg_renderer::{render_to_string, RenderOptions};
use crate::tools::{toolbar, Tool, ToolbarItem};
use crate::viewport::Viewport;

/// Fired after every committed mutation.
pub type ChangeCallback = Box<dyn FnMut(RinkDiagramData)>;
/// Fired on an explicit save with the diagram and its vector document.
pub type SaveCallback = Box<dyn FnMut(RinkDiagramData, String)>;

pub struct RinkEditor {
    canvas: Canvas,
    editable: bool,
    surface: Option<Viewport>,
    on_change: Option<ChangeCallback>,
    on_save: Option<SaveCallback>,
}

impl RinkEditor {
    /// Editor with default configuration. `initial` of `None` starts an
    /// empty full rink.
    pub fn new(initial: Option<RinkDiagramData>, editable: bool) -> Self {
        Self::with_config(initial, editable, EditorConfig::default())
    }

    pub fn with_config(
        initial: Option<RinkDiagramData>,
        editable: bool,
        config: EditorConfig,
    ) -> Self {
        let canvas = match initial {
            Some(data) => Canvas::from_data(data, config),
            None => Canvas::with_config(config),
        };
        Self {
            canvas,
            editable,
            surface: None,
            on_change: None,
            on_save: None,
        }
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(RinkDiagramData) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn set_on_save(&mut self, callback: impl FnMut(RinkDiagramData, String) + 'static) {
        self.on_save = Some(Box::new(callback));
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        if !editable {
            self.canvas.cancel();
        }
        self.editable = editable;
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Attaches the drawing surface at its on-screen rectangle.
    pub fn mount(&mut self, left: f64, top: f64, width: f64, height: f64) {
        let mut viewport = Viewport::new(self.canvas.rink_type());
        viewport.set_display_rect(left, top, width, height);
        tracing::debug!("Mounted surface: {}", viewport);
        self.surface = Some(viewport);
    }

    /// Updates the displayed rectangle after a layout change.
    pub fn resize(&mut self, left: f64, top: f64, width: f64, height: f64) {
        match self.surface.as_mut() {
            Some(viewport) => viewport.set_display_rect(left, top, width, height),
            None => self.mount(left, top, width, height),
        }
    }

    pub fn unmount(&mut self) {
        self.surface = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Toolbar buttons, or `None` when the editor is read-only.
    pub fn toolbar(&self) -> Option<Vec<ToolbarItem>> {
        self.editable.then(toolbar)
    }

    /// Routes a pointer event to the canvas. Returns `true` on a commit.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if !self.editable {
            return false;
        }
        let viewport = self
            .surface
            .unwrap_or_else(|| Viewport::new(self.canvas.rink_type()));
        let p = viewport.pixel_to_world(event.client_x, event.client_y);

        let committed = match event.kind {
            PointerEventKind::Down => self.canvas.pointer_down(p),
            PointerEventKind::Move => {
                self.canvas.pointer_move(p);
                false
            }
            PointerEventKind::Up => self.canvas.pointer_up(p),
            PointerEventKind::Leave => self.canvas.pointer_leave(p),
        };
        if committed {
            self.notify_change();
        }
        committed
    }

    /// Handles a key press. Returns `true` when the key was consumed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if !self.editable {
            return false;
        }
        match event.key.as_str() {
            "Delete" | "Backspace" => {
                if event.in_text_input {
                    return false;
                }
                if self.canvas.delete_selected() {
                    self.notify_change();
                }
                true
            }
            "Escape" => {
                self.canvas.cancel();
                true
            }
            "z" | "Z" if event.has_command_modifier() => {
                self.undo();
                true
            }
            _ => {
                if event.in_text_input || event.has_command_modifier() {
                    return false;
                }
                let Some(tool) = event.as_char().and_then(Tool::from_shortcut) else {
                    return false;
                };
                let tool = match tool {
                    Tool::Freehand { .. } => Tool::Freehand {
                        arrow_end: self.canvas.config().freehand_arrow_end,
                    },
                    other => other,
                };
                self.canvas.set_tool(tool);
                true
            }
        }
    }

    pub fn tool(&self) -> Tool {
        self.canvas.tool()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.editable {
            self.canvas.set_tool(tool);
        }
    }

    /// Selects a tool by its string id (`"marker_X"`, `"arrow_pass"`, ...).
    pub fn set_tool_by_id(&mut self, id: &str) -> Result<(), DiagramError> {
        let tool = id.parse::<Tool>().inspect_err(|_| {
            tracing::warn!("Ignoring unknown tool id '{}'", id);
        })?;
        self.set_tool(tool);
        Ok(())
    }

    /// Switches the rink. Elements stay where they are.
    pub fn set_rink_type(&mut self, rink_type: RinkType) -> bool {
        if !self.editable || !self.canvas.set_rink_type(rink_type) {
            return false;
        }
        if let Some(viewport) = self.surface.as_mut() {
            viewport.set_rink_type(rink_type);
        }
        self.notify_change();
        true
    }

    /// Selects an element, e.g. when the host's label field targets it.
    pub fn select(&mut self, id: &ElementId) -> bool {
        self.editable && self.canvas.select(id)
    }

    /// Sets or clears a marker's sub-label. Empty text clears it.
    pub fn set_marker_label(&mut self, id: &ElementId, label: Option<String>) -> bool {
        if !self.editable || !self.canvas.set_marker_label(id, label) {
            return false;
        }
        self.notify_change();
        true
    }

    pub fn undo(&mut self) -> bool {
        if !self.editable || !self.canvas.undo() {
            return false;
        }
        self.notify_change();
        true
    }

    pub fn clear_all(&mut self) -> bool {
        if !self.editable || !self.canvas.clear_all() {
            return false;
        }
        self.notify_change();
        true
    }

    /// Explicit save: hands the diagram and its SVG to `on_save`.
    pub fn save(&mut self) -> bool {
        if !self.editable {
            return false;
        }
        let data = self.get_diagram_data();
        let document = self.get_serialized_document();
        match self.on_save.as_mut() {
            Some(callback) => {
                callback(data, document);
                true
            }
            None => false,
        }
    }

    /// Current diagram as an owned snapshot.
    pub fn get_diagram_data(&self) -> RinkDiagramData {
        self.canvas.diagram_data()
    }

    /// Current diagram as an export-mode SVG document.
    pub fn get_serialized_document(&self) -> String {
        export::export_svg(&self.canvas.diagram_data())
    }

    /// Live view of the surface: selection outline, hit regions and preview.
    pub fn render(&self) -> String {
        let options = RenderOptions {
            interactive: self.editable,
            selection: self.canvas.selection().cloned(),
            preview: self.canvas.preview(),
        };
        render_to_string(&self.canvas.diagram_data(), &options)
    }

    /// SVG export. `None` while no surface is mounted or when read-only.
    pub fn export_svg(&self) -> Option<String> {
        self.can_export().then(|| self.get_serialized_document())
    }

    /// PNG export at the configured scale. `None` while no surface is mounted,
    /// when read-only, or if rasterization fails.
    pub fn export_png(&self) -> Option<Vec<u8>> {
        if !self.can_export() {
            return None;
        }
        let scale = self.canvas.config().export_scale;
        match export::export_png(&self.canvas.diagram_data(), scale) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!("PNG export failed: {}", e);
                None
            }
        }
    }

    fn can_export(&self) -> bool {
        self.editable && self.surface.is_some()
    }

    fn notify_change(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.canvas.diagram_data());
        }
    }
}

impl std::fmt::Debug for RinkEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RinkEditor")
            .field("canvas", &self.canvas)
            .field("editable", &self.editable)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}
