//! Serialization and deserialization for diagram files.
//!
//! Implements save/load for `.rink` files: JSON wrapping the diagram payload
//! with file-level metadata. Loading also accepts a bare diagram payload, which
//! is what host pages store.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::{RinkDiagramData, RinkType};

/// Diagram file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete diagram file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramFile {
    pub version: String,
    pub metadata: DiagramMetadata,
    pub diagram: RinkDiagramData,
}

/// Diagram metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl DiagramFile {
    /// Empty diagram of the given rink type.
    pub fn new(name: impl Into<String>, rink_type: RinkType) -> Self {
        Self::from_diagram(name, RinkDiagramData::new(rink_type))
    }

    /// Wraps an existing diagram payload.
    pub fn from_diagram(name: impl Into<String>, diagram: RinkDiagramData) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DiagramMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            diagram,
        }
    }

    /// Writes pretty JSON, stamping the modification time.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.metadata.modified = Utc::now();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize diagram")?;

        std::fs::write(path.as_ref(), json).context("Failed to write diagram file")?;
        tracing::info!("Saved diagram to {}", path.as_ref().display());

        Ok(())
    }

    /// Reads a diagram file or a bare diagram payload.
    ///
    /// The diagram is validated and its dimensions normalized to the rink type.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).context("Failed to read diagram file")?;

        let mut file = match serde_json::from_str::<DiagramFile>(&content) {
            Ok(file) => file,
            Err(_) => {
                let diagram = RinkDiagramData::from_json(&content)
                    .context("Failed to parse diagram file")?;
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                tracing::debug!("{} holds a bare diagram payload", path.display());
                Self::from_diagram(name, diagram)
            }
        };

        file.diagram.validate().context("Invalid diagram")?;
        file.diagram = file.diagram.normalized();
        Ok(file)
    }
}
