//! Configuration and settings management for RinkKit
//!
//! Provides configuration file handling and validation for the diagram editor.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into:
//! - Interaction tolerances (hit threshold, freehand decimation and smoothing)
//! - History depth
//! - Export settings
//! - Arrow colour palette

use rinkkit_core::constants::{self, palette};
use rinkkit_core::{ConfigError, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name used inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "rinkkit.toml";

const RINK_TYPES: [&str; 3] = ["full", "half", "quarter"];

/// Colours assigned to new arrows by semantic role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowPalette {
    /// Skating, lateral and legacy arrows
    pub primary: String,
    /// Backward skating arrows
    pub backward: String,
    /// Pass arrows
    pub pass: String,
    /// Shot arrows
    pub shot: String,
}

impl Default for ArrowPalette {
    fn default() -> Self {
        Self {
            primary: palette::PRIMARY.to_string(),
            backward: palette::BACKWARD.to_string(),
            pass: palette::PASS.to_string(),
            shot: palette::SHOT.to_string(),
        }
    }
}

impl ArrowPalette {
    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("palette.primary", &self.primary),
            ("palette.backward", &self.backward),
            ("palette.pass", &self.pass),
            ("palette.shot", &self.shot),
        ] {
            if !is_hex_color(value) {
                return Err(invalid(key, format!("'{}' is not a #rrggbb colour", value)));
            }
        }
        Ok(())
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pick radius for select and eraser, in logical units
    pub hit_threshold: f64,
    /// Minimum spacing kept between freehand points
    pub decimation_distance: f64,
    /// Chaikin passes applied to finished strokes
    pub smoothing_iterations: usize,
    /// Undo depth
    pub history_limit: usize,
    /// Raster export upscale factor
    pub export_scale: f32,
    /// Rink used when no initial diagram is supplied
    pub default_rink_type: String,
    /// Whether the freehand tool caps strokes with an arrowhead by default
    pub freehand_arrow_end: bool,
    /// Arrow colours
    pub palette: ArrowPalette,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_threshold: constants::HIT_THRESHOLD,
            decimation_distance: constants::DECIMATION_DISTANCE,
            smoothing_iterations: constants::SMOOTHING_ITERATIONS,
            history_limit: constants::HISTORY_LIMIT,
            export_scale: constants::EXPORT_SCALE,
            default_rink_type: "full".to_string(),
            freehand_arrow_end: false,
            palette: ArrowPalette::default(),
        }
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config_dir>/rinkkit/rinkkit.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rinkkit").join(CONFIG_FILE_NAME))
    }

    /// Load the config from the default location, falling back to defaults
    /// when the file does not exist or cannot be read.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                reason: e.to_string(),
            })?,
            Some("toml") => toml::from_str(&content).map_err(|e| ConfigError::Parse {
                reason: e.to_string(),
            })?,
            _ => return Err(unsupported(path)),
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?,
            _ => return Err(unsupported(path)),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.hit_threshold.is_finite() && self.hit_threshold > 0.0) {
            return Err(invalid("hit_threshold", "must be > 0"));
        }
        if !(self.decimation_distance.is_finite() && self.decimation_distance >= 0.0) {
            return Err(invalid("decimation_distance", "must be >= 0"));
        }
        if self.smoothing_iterations > 8 {
            return Err(invalid("smoothing_iterations", "must be at most 8"));
        }
        if self.history_limit == 0 {
            return Err(invalid("history_limit", "must be > 0"));
        }
        if !(self.export_scale.is_finite() && self.export_scale > 0.0 && self.export_scale <= 8.0)
        {
            return Err(invalid("export_scale", "must be in (0, 8]"));
        }
        if !RINK_TYPES.contains(&self.default_rink_type.as_str()) {
            return Err(invalid(
                "default_rink_type",
                format!("'{}' is not one of full, half, quarter", self.default_rink_type),
            ));
        }
        self.palette.validate()
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn invalid(key: &str, reason: impl Into<String>) -> Error {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.into(),
    }
    .into()
}

fn unsupported(path: &Path) -> Error {
    ConfigError::UnsupportedFormat {
        path: path.display().to_string(),
    }
    .into()
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
