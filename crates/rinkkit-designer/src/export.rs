//! Vector and raster export of a rendered diagram.
//!
//! Both exports start from the same export-mode SVG (no selection outline,
//! no hit regions, no preview). The raster path rasterizes that document with
//! resvg at `scale` times the logical size and encodes it as PNG.

use std::io::Cursor;
use std::sync::{Arc, OnceLock};

use image::{ImageFormat, Rgba, RgbaImage};
use resvg::usvg;
use rinkkit_core::{ExportError, Result};

use crate::model::RinkDiagramData;
use crate::svg_renderer::{render_to_string, RenderOptions};

/// Self-contained SVG document sized to the rink's logical dimensions.
pub fn export_svg(data: &RinkDiagramData) -> String {
    render_to_string(data, &RenderOptions::export())
}

/// Rasterizes the diagram at `scale` times its logical size.
pub fn rasterize(data: &RinkDiagramData, scale: f32) -> Result<RgbaImage> {
    let svg = export_svg(data);
    let (width, height) = data.rink_type.dimensions();
    let px_width = (width as f32 * scale).round() as u32;
    let px_height = (height as f32 * scale).round() as u32;

    let opt = usvg::Options {
        fontdb: font_database(),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opt).map_err(|e| ExportError::Parse {
        reason: e.to_string(),
    })?;

    let mut pixmap =
        tiny_skia::Pixmap::new(px_width, px_height).ok_or(ExportError::Surface {
            width: px_width,
            height: px_height,
        })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut image = RgbaImage::new(px_width, px_height);
    for (pixel, out) in pixmap.pixels().iter().zip(image.pixels_mut()) {
        let c = pixel.demultiply();
        *out = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    tracing::debug!("Rasterized diagram to {}x{}", px_width, px_height);
    Ok(image)
}

/// System fonts for marker letters and labels, loaded on first raster export.
pub(crate) fn font_database() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            if db.faces().next().is_none() {
                tracing::warn!("No system fonts found; PNG exports will omit marker text");
            } else {
                tracing::debug!("Loaded {} font face(s)", db.faces().count());
            }
            Arc::new(db)
        })
        .clone()
}

/// PNG bytes of the diagram rendered at `scale`.
pub fn export_png(data: &RinkDiagramData, scale: f32) -> Result<Vec<u8>> {
    let image = rasterize(data, scale)?;
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| ExportError::Encode {
            reason: e.to_string(),
        })?;
    Ok(bytes)
}
