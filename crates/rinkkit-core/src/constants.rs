//! Constants shared across the editor, renderers and settings.

/// Maximum number of undo snapshots kept by a canvas.
pub const HISTORY_LIMIT: usize = 30;

/// Default pick radius, in logical units, for select and eraser hit-testing.
pub const HIT_THRESHOLD: f64 = 20.0;

/// Minimum spacing between consecutive freehand points after decimation.
pub const DECIMATION_DISTANCE: f64 = 4.0;

/// Number of Chaikin corner-cutting passes applied to freehand strokes.
pub const SMOOTHING_ITERATIONS: usize = 2;

/// Arrows shorter than this are treated as a double click on one spot.
pub const MIN_ARROW_LENGTH: f64 = 1.0;

/// Upscale factor used by raster export.
pub const EXPORT_SCALE: f32 = 2.0;

/// Version stamped into newly created diagram payloads.
pub const DIAGRAM_VERSION: u32 = 1;

// Element geometry, logical units.
pub const MARKER_RADIUS: f64 = 14.0;
pub const PUCK_RADIUS: f64 = 5.0;
pub const PYLON_SIZE: f64 = 12.0;
pub const NET_WIDTH: f64 = 24.0;
pub const NET_HEIGHT: f64 = 16.0;
pub const ARROWHEAD_SIZE: f64 = 10.0;

pub const DEFAULT_ARROW_WIDTH: f64 = 2.5;
pub const SHOT_ARROW_WIDTH: f64 = 4.0;
pub const FREEHAND_WIDTH: f64 = 3.0;
pub const FREEHAND_HIT_WIDTH: f64 = 16.0;

/// Arrow and marker palette.
pub mod palette {
    pub const PRIMARY: &str = "#1d3557";
    pub const BACKWARD: &str = "#e09f3e";
    pub const PASS: &str = "#2563eb";
    pub const SHOT: &str = "#d62828";
    pub const SELECTION: &str = "#f77f00";
    pub const PUCK: &str = "#111111";
    pub const PYLON: &str = "#f97316";
    pub const NET: &str = "#b91c1c";
    pub const MARKER_FILL: &str = "#ffffff";
    pub const ICE: &str = "#f8fbff";
    pub const BOARDS: &str = "#1f2937";
    pub const RED_LINE: &str = "#c1121f";
    pub const BLUE_LINE: &str = "#1d4ed8";
}
