//! # RinkKit
//!
//! Hockey rink diagram editor: player markers, pucks, pylons, nets, typed
//! arrows and freehand strokes on a full, half or quarter rink, with undo and
//! SVG/PNG export.
//!
//! ## Architecture
//!
//! RinkKit is organized as a workspace with multiple crates:
//!
//! 1. **rinkkit-core** - Error types, palette and geometry constants
//! 2. **rinkkit-settings** - Editor configuration (JSON/TOML)
//! 3. **rinkkit-designer** - Element model, canvas state machine, renderers, export
//! 4. **rinkkit** - Command-line front end that integrates all crates

pub mod cli;

pub use rinkkit_designer as designer;

pub use rinkkit_core::{ConfigError, DiagramError, Error, ExportError, Result};

pub use rinkkit_designer::{
    Canvas, DiagramFile, KeyEvent, PointerEvent, RinkDiagramData, RinkEditor, RinkElement,
    RinkType, Tool,
};

pub use rinkkit_settings::{ArrowPalette, EditorConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so exported SVG can go to stdout
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
