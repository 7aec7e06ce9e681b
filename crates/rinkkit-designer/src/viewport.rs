//! Mapping between client (screen) coordinates and logical rink coordinates.
//!
//! The drawing surface has a fixed logical size per rink type but may be
//! displayed at any size. Pointer positions arrive in client space and must be
//! scaled by logical/displayed before they reach the canvas.

use std::fmt;

use crate::model::{Point, RinkType};

/// Displayed bounding box of the drawing surface plus its logical size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    left: f64,
    top: f64,
    display_width: f64,
    display_height: f64,
    logical_width: f64,
    logical_height: f64,
}

impl Viewport {
    /// Surface displayed at its logical size with the top-left at the origin.
    pub fn new(rink_type: RinkType) -> Self {
        let (w, h) = rink_type.dimensions();
        Self {
            left: 0.0,
            top: 0.0,
            display_width: w,
            display_height: h,
            logical_width: w,
            logical_height: h,
        }
    }

    /// Updates the on-screen bounding box (layout or window resize).
    pub fn set_display_rect(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.left = left;
        self.top = top;
        self.display_width = width;
        self.display_height = height;
    }

    /// Updates the logical size after a rink type change.
    pub fn set_rink_type(&mut self, rink_type: RinkType) {
        let (w, h) = rink_type.dimensions();
        self.logical_width = w;
        self.logical_height = h;
    }

    pub fn logical_size(&self) -> (f64, f64) {
        (self.logical_width, self.logical_height)
    }

    pub fn display_size(&self) -> (f64, f64) {
        (self.display_width, self.display_height)
    }

    /// Logical units per displayed pixel on each axis.
    ///
    /// A collapsed (zero or negative) display box maps 1:1 so pointer input
    /// never produces NaN or infinite coordinates.
    pub fn scale(&self) -> (f64, f64) {
        let sx = if self.display_width > 0.0 {
            self.logical_width / self.display_width
        } else {
            1.0
        };
        let sy = if self.display_height > 0.0 {
            self.logical_height / self.display_height
        } else {
            1.0
        };
        (sx, sy)
    }

    /// Converts a client position to logical coordinates.
    ///
    /// ```text
    /// x = (client_x - left) * logical_width / display_width
    /// y = (client_y - top) * logical_height / display_height
    /// ```
    pub fn pixel_to_world(&self, client_x: f64, client_y: f64) -> Point {
        let (sx, sy) = self.scale();
        Point::new((client_x - self.left) * sx, (client_y - self.top) * sy)
    }

    /// Converts a logical position back to client coordinates.
    pub fn world_to_pixel(&self, point: &Point) -> (f64, f64) {
        let (sx, sy) = self.scale();
        (point.x / sx + self.left, point.y / sy + self.top)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}x{:.0} shown at ({:.1}, {:.1}) {:.1}x{:.1}",
            self.logical_width,
            self.logical_height,
            self.left,
            self.top,
            self.display_width,
            self.display_height
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(RinkType::default())
    }
}
