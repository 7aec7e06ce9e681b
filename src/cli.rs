//! Command-line front end.
//!
//! `rinkkit render` exports a saved diagram to SVG and/or PNG, `rinkkit new`
//! writes an empty diagram file and `rinkkit tools` lists the editor tools.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use rinkkit_designer::{toolbar, DiagramFile, RinkEditor, RinkType};
use rinkkit_settings::EditorConfig;

/// Command-line arguments for the RinkKit diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to an editor configuration file (JSON or TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export a saved diagram. Prints SVG to stdout when no output is given.
    Render {
        /// Diagram file (`.rink` or a bare diagram JSON payload)
        input: PathBuf,
        /// Write the SVG document here
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Write a PNG raster here
        #[arg(long)]
        png: Option<PathBuf>,
        /// Show the diagram on a different rink (full, half, quarter)
        #[arg(long)]
        rink_type: Option<RinkType>,
    },
    /// Create an empty diagram file
    New {
        output: PathBuf,
        #[arg(long, default_value = "full")]
        rink_type: RinkType,
        /// Diagram name stored in the file metadata
        #[arg(long)]
        name: Option<String>,
    },
    /// List editor tools and their shortcuts
    Tools,
}

/// Runs a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Render {
            input,
            svg,
            png,
            rink_type,
        } => render(&input, svg.as_deref(), png.as_deref(), rink_type, config),
        Command::New {
            output,
            rink_type,
            name,
        } => {
            let name = name.unwrap_or_else(|| file_name(&output));
            DiagramFile::new(name, rink_type).save_to_file(&output)
        }
        Command::Tools => {
            let mut out = std::io::stdout().lock();
            for item in toolbar() {
                let shortcut = item.shortcut.map(String::from).unwrap_or_default();
                writeln!(out, "{:<20} {:<3} {}", item.tool.to_string(), shortcut, item.label)?;
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    let config = match path {
        Some(path) => EditorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::load_or_default(),
    };
    config.validate().context("Invalid editor configuration")?;
    Ok(config)
}

fn render(
    input: &Path,
    svg: Option<&Path>,
    png: Option<&Path>,
    rink_type: Option<RinkType>,
    config: EditorConfig,
) -> Result<()> {
    let file = DiagramFile::load_from_file(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    tracing::info!(
        "Rendering '{}' ({} element(s))",
        file.metadata.name,
        file.diagram.elements.len()
    );

    let mut editor = RinkEditor::with_config(Some(file.diagram), true, config);
    if let Some(rink_type) = rink_type {
        editor.set_rink_type(rink_type);
    }
    let (width, height) = editor.canvas().dimensions();
    editor.mount(0.0, 0.0, width, height);

    let document = editor
        .export_svg()
        .ok_or_else(|| anyhow!("Drawing surface unavailable"))?;

    if svg.is_none() && png.is_none() {
        std::io::stdout().lock().write_all(document.as_bytes())?;
        return Ok(());
    }
    if let Some(path) = svg {
        std::fs::write(path, &document)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }
    if let Some(path) = png {
        let bytes = editor
            .export_png()
            .ok_or_else(|| anyhow!("PNG export failed"))?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}
