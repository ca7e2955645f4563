//! Export command for rendering shade scales in stylesheet formats.

use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::common::{parse_hex_arg, CliError, CliResult};
use crate::export::{variable_prefix, ExportFormat};
use crate::models::ColorGroup;
use crate::palette::generate_shades;

/// Export a shade scale in a stylesheet format
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Base color in hex format (#RRGGBB or #RGB)
    #[arg(short, long, value_name = "HEX")]
    pub color: String,

    /// Palette name used as the variable prefix
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// Output format: tailwind, css, sass, or json
    #[arg(short, long, value_name = "FORMAT")]
    pub format: String,

    /// Write output to a file or directory instead of stdout
    /// (directories get `<name>_palette_<date>.<ext>`)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Copy output to the system clipboard
    #[arg(long)]
    pub copy: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let format: ExportFormat = self.format.parse().map_err(CliError::validation)?;
        let base = parse_hex_arg(&self.color).map_err(CliError::validation)?;

        let group = ColorGroup::new(&self.name, base, generate_shades(base));
        let rendered = format.render(&group);

        if let Some(path) = &self.output {
            let output_path = resolve_output_path(path, &group, format);

            fs::write(&output_path, &rendered)
                .map_err(|e| CliError::io(format!("Failed to write output file: {e}")))?;

            println!("✓ Exported {} palette to: {}", format, output_path.display());
        }

        if self.copy {
            copy_to_clipboard(&rendered)?;
            println!("✓ Copied {} export to clipboard", format);
        }

        if self.output.is_none() && !self.copy {
            println!("{rendered}");
        }

        Ok(())
    }
}

/// Resolves the output file path. A directory argument gets an
/// auto-generated `<prefix>_palette_<date>.<ext>` filename inside it.
fn resolve_output_path(path: &Path, group: &ColorGroup, format: ExportFormat) -> PathBuf {
    if !path.is_dir() {
        return path.to_path_buf();
    }

    let date = chrono::Local::now().format("%Y-%m-%d");
    let prefix = variable_prefix(&group.title);

    path.join(format!("{}_palette_{}.{}", prefix, date, format.extension()))
}

/// Places text on the system clipboard.
fn copy_to_clipboard(text: &str) -> CliResult<()> {
    let mut clipboard = arboard::Clipboard::new()
        .map_err(|e| CliError::io(format!("Failed to access clipboard: {e}")))?;

    clipboard
        .set_text(text.to_owned())
        .map_err(|e| CliError::io(format!("Failed to copy to clipboard: {e}")))?;

    Ok(())
}
