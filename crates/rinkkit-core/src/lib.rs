//! # RinkKit Core
//!
//! Shared error types and constants for the RinkKit workspace.
//! Every other crate depends on this one. It holds no rendering
//! or file I/O code.

pub mod constants;
pub mod error;

pub use error::{ConfigError, DiagramError, Error, ExportError, Result};
