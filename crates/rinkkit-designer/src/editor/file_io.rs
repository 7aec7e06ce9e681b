//! File operations for the editor.

use anyhow::Result;
use std::path::Path;

use rinkkit_settings::EditorConfig;

use super::RinkEditor;
use crate::serialization::DiagramFile;

impl RinkEditor {
    /// Opens a diagram file as a new editor.
    pub fn open_file(path: impl AsRef<Path>, editable: bool, config: EditorConfig) -> Result<Self> {
        let file = DiagramFile::load_from_file(path)?;
        Ok(Self::with_config(Some(file.diagram), editable, config))
    }

    /// Saves the current diagram under `name`.
    pub fn save_file(&self, path: impl AsRef<Path>, name: &str) -> Result<()> {
        let mut file = DiagramFile::from_diagram(name, self.get_diagram_data());
        file.save_to_file(path)
    }
}
