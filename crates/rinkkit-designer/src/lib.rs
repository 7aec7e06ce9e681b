//! # RinkKit Designer
//!
//! Editing engine for hockey rink diagrams: place player markers, pucks,
//! pylons and nets, draw typed arrows and freehand strokes, drag and erase
//! them, undo, and export the result as SVG or PNG.
//!
//! ## Core Components
//!
//! - **Model**: closed [`RinkElement`] enum plus the serializable
//!   [`RinkDiagramData`] payload hosts store
//! - **Geometry**: hit-testing, freehand decimation and Chaikin smoothing
//! - **Canvas**: tool state machine, selection and bounded snapshot history
//! - **Viewport**: client to logical coordinate mapping
//! - **Renderer**: SVG output per element variant, rink backgrounds, previews
//! - **Export**: vector document and 2x PNG raster
//! - **Editor**: the host-facing component with callbacks
//!
//! ## Architecture
//!
//! ```text
//! RinkEditor (host contract, callbacks)
//!   ├── Viewport (screen -> logical)
//!   └── Canvas (tools, gestures, selection)
//!         ├── Elements (RinkDiagramData)
//!         └── SnapshotHistory (undo)
//!
//! svg_renderer -> export (SVG string, PNG bytes)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rinkkit_designer::{PointerEvent, RinkEditor, Tool, MarkerType};
//!
//! let mut editor = RinkEditor::new(None, true);
//! editor.set_tool(Tool::Marker(MarkerType::X));
//! editor.handle_pointer(PointerEvent::down(100.0, 50.0));
//! editor.handle_pointer(PointerEvent::up(100.0, 50.0));
//!
//! assert_eq!(editor.get_diagram_data().elements.len(), 1);
//! ```

pub mod canvas;
pub mod editor;
pub mod export;
pub mod geometry;
pub mod history;
pub mod model;
pub mod serialization;
pub mod svg_renderer;
pub mod tools;
pub mod viewport;

pub use canvas::{Canvas, Preview};
pub use editor::{
    ChangeCallback, KeyEvent, PointerEvent, PointerEventKind, RinkEditor, SaveCallback,
};
pub use export::{export_png, export_svg, rasterize};
pub use geometry::{
    chaikin_smooth, decimate_points, distance_point_to_element, distance_to_segment, hit_test,
    nearest_element_within,
};
pub use history::{Snapshot, SnapshotHistory};
pub use model::{
    Arrow, ArrowStyle, ArrowVariant, DashPattern, DrawLayer, ElementId, ElementKind, Freehand,
    IdGenerator, Marker, MarkerType, Placement, Point, RinkDiagramData, RinkElement, RinkType,
};
pub use serialization::{DiagramFile, DiagramMetadata};
pub use svg_renderer::{render_document, render_element, render_to_string, RenderOptions};
pub use tools::{toolbar, Tool, ToolGroup, ToolbarItem};
pub use viewport::Viewport;
