//! Palette role management commands.
//!
//! Provides commands to show, update, and export the configured palette
//! roles (primary, secondary, neutral, and the supporting state colors).

use clap::{Args, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{load_config, parse_hex_arg, CliError, CliResult};
use crate::config::{ColorRole, Config};
use crate::export::{variable_prefix, ExportFormat};
use crate::models::ColorGroup;
use crate::palette::generate_shades;

/// Manage and export the configured palette roles
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Palette subcommand
    #[command(subcommand)]
    pub command: PaletteCommand,
}

/// Palette management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PaletteCommand {
    /// List configured roles with their base colors
    Show(ShowPaletteArgs),
    /// Update the base color of one role
    Set(SetRoleArgs),
    /// Export every role's shade scale to files
    Export(ExportPaletteArgs),
}

/// List configured roles with their base colors
#[derive(Debug, Clone, Args)]
pub struct ShowPaletteArgs {
    /// Path to a config file (defaults to the user configuration)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Update the base color of one role
#[derive(Debug, Clone, Args)]
pub struct SetRoleArgs {
    /// Role to update (primary, secondary, neutral, success, warning, error, info)
    #[arg(long, value_name = "ROLE")]
    pub role: String,

    /// New base color in hex format (#RRGGBB or #RGB)
    #[arg(long, value_name = "HEX")]
    pub color: String,

    /// Path to a config file (defaults to the user configuration)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Export every role's shade scale to files
#[derive(Debug, Clone, Args)]
pub struct ExportPaletteArgs {
    /// Output format: tailwind, css, sass, or json
    /// (defaults to the configured format)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Output directory (defaults to the configured export directory)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Path to a config file (defaults to the user configuration)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

// JSON response types
#[derive(Debug, Serialize)]
struct RoleItem {
    role: String,
    color: String,
}

#[derive(Debug, Serialize)]
struct ShowPaletteResponse {
    roles: Vec<RoleItem>,
    count: usize,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PaletteCommand::Show(args) => args.execute(),
            PaletteCommand::Set(args) => args.execute(),
            PaletteCommand::Export(args) => args.execute(),
        }
    }
}

impl ShowPaletteArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;

        let roles: Vec<RoleItem> = ColorRole::all()
            .into_iter()
            .map(|role| RoleItem {
                role: role.to_string(),
                color: config.roles.get(role).to_hex(),
            })
            .collect();

        let response = ShowPaletteResponse {
            count: roles.len(),
            roles,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Palette roles ({}):", response.count);
            println!();
            for item in response.roles {
                println!("  {:<12} {}", item.role, item.color);
            }
        }

        Ok(())
    }
}

impl SetRoleArgs {
    /// Execute the set command
    pub fn execute(&self) -> CliResult<()> {
        let role: ColorRole = self.role.parse().map_err(CliError::validation)?;
        let color = parse_hex_arg(&self.color).map_err(CliError::validation)?;

        // Missing config files start from defaults so the first `set` works
        let mut config = match &self.config {
            Some(path) if path.exists() => load_config(Some(path.as_path()))?,
            Some(_) => Config::new(),
            None => Config::load().unwrap_or_else(|_| Config::new()),
        };

        config.roles.set(role, color);

        let save_result = match &self.config {
            Some(path) => config.save_to(path),
            None => config.save(),
        };
        save_result.map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Role '{}' set to {}.", role, color.to_hex());
        Ok(())
    }
}

impl ExportPaletteArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;

        let format = match &self.format {
            Some(value) => value.parse().map_err(CliError::validation)?,
            None => config.export.default_format,
        };

        let out_dir = self
            .out_dir
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());

        fs::create_dir_all(&out_dir)
            .map_err(|e| CliError::io(format!("Failed to create output directory: {e}")))?;

        for role in ColorRole::all() {
            let base = config.roles.get(role);
            let group = ColorGroup::new(role.title(), base, generate_shades(base));
            let rendered = format.render(&group);

            let filename = format!("{}.{}", variable_prefix(role.title()), format.extension());
            fs::write(out_dir.join(&filename), rendered)
                .map_err(|e| CliError::io(format!("Failed to write {filename}: {e}")))?;
        }

        println!(
            "✓ Exported {} {} palettes to: {}",
            ColorRole::all().len(),
            format,
            out_dir.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_unknown_role() {
        let args = SetRoleArgs {
            role: "accent".to_string(),
            color: "#FF0000".to_string(),
            config: None,
        };

        let result = args.execute();
        assert!(matches!(result, Err(CliError::Validation(_))));
    }

    #[test]
    fn test_set_rejects_invalid_color() {
        let args = SetRoleArgs {
            role: "primary".to_string(),
            color: "#XYZ".to_string(),
            config: None,
        };

        let result = args.execute();
        assert!(matches!(result, Err(CliError::Validation(_))));
    }

    #[test]
    fn test_export_writes_one_file_per_role() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        Config::new().save_to(&config_path).unwrap();

        let out_dir = temp_dir.path().join("exports");
        let args = ExportPaletteArgs {
            format: Some("css".to_string()),
            out_dir: Some(out_dir.clone()),
            config: Some(config_path),
        };

        args.execute().unwrap();

        for name in [
            "primary", "secondary", "neutral", "success", "warning", "error", "info",
        ] {
            let path = out_dir.join(format!("{name}.css"));
            assert!(path.exists(), "Missing export for role {name}");

            let content = fs::read_to_string(&path).unwrap();
            assert!(content.contains(&format!("--{name}-base:")));
        }
    }
}
