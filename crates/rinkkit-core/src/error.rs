//! Error handling for RinkKit
//!
//! Drawing gestures never fail: degenerate input is silently ignored by the
//! canvas. The error types here cover the edges of the system instead:
//! - Diagram payloads that cannot be parsed or are inconsistent
//! - Export failures (rendering or encoding)
//! - Configuration files that are unreadable or invalid
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Diagram payload error type
///
/// Raised when a serialized diagram cannot be turned into editor state.
#[derive(Error, Debug, Clone)]
pub enum DiagramError {
    /// JSON could not be parsed into a diagram
    #[error("Invalid diagram data: {reason}")]
    InvalidData {
        /// The parser's description of the problem.
        reason: String,
    },

    /// Rink type string is not one of full/half/quarter
    #[error("Unknown rink type: {value}")]
    UnknownRinkType {
        /// The offending value.
        value: String,
    },

    /// Tool identifier is not recognised
    #[error("Unknown tool: {value}")]
    UnknownTool {
        /// The offending value.
        value: String,
    },

    /// Two elements share one id
    #[error("Duplicate element id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// Freehand stroke with fewer than two points
    #[error("Freehand element {id} has {count} point(s), at least 2 required")]
    DegenerateStroke {
        /// The element id.
        id: String,
        /// Number of points found.
        count: usize,
    },
}

/// Export error type
#[derive(Error, Debug, Clone)]
pub enum ExportError {
    /// The vector document could not be parsed back for rasterisation
    #[error("Failed to parse vector document: {reason}")]
    Parse {
        /// Parser message.
        reason: String,
    },

    /// Pixmap allocation failed
    #[error("Cannot allocate a {width}x{height} raster surface")]
    Surface {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// PNG encoding failed
    #[error("Failed to encode image: {reason}")]
    Encode {
        /// Encoder message.
        reason: String,
    },
}

/// Configuration error type
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// A setting is out of range
    #[error("Invalid setting '{key}': {reason}")]
    InvalidValue {
        /// Setting name.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// File extension is neither .json nor .toml
    #[error("Config file must be .json or .toml: {path}")]
    UnsupportedFormat {
        /// The rejected path.
        path: String,
    },

    /// The file could not be parsed
    #[error("Invalid config file: {reason}")]
    Parse {
        /// Parser message.
        reason: String,
    },
}

/// Main error type for RinkKit
#[derive(Error, Debug)]
pub enum Error {
    /// Diagram error
    #[error(transparent)]
    Diagram(#[from] DiagramError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Diagram(DiagramError::InvalidData {
            reason: err.to_string(),
        })
    }
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a diagram error
    pub fn is_diagram_error(&self) -> bool {
        matches!(self, Error::Diagram(_))
    }

    /// Check if this is an export error
    pub fn is_export_error(&self) -> bool {
        matches!(self, Error::Export(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
