//! # RinkKit Settings
//!
//! Editor configuration: hit-testing tolerances, freehand processing,
//! history depth, export scale, default rink and the arrow palette.
//! Stored as JSON or TOML in the platform configuration directory.

pub mod config;

pub use config::{ArrowPalette, EditorConfig, CONFIG_FILE_NAME};
