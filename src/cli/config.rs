//! Configuration management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::export::ExportFormat;

/// Configuration management commands
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigShowArgs {
    /// Path to a config file (defaults to the user configuration)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Debug, Clone, Args)]
pub struct ConfigSetArgs {
    /// Directory palette exports are written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Default export format (tailwind, css, sass, or json)
    #[arg(long, value_name = "FORMAT")]
    default_format: Option<String>,

    /// Path to a config file (defaults to the user configuration)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Debug, Serialize)]
struct ConfigOutput {
    roles: RolesOutput,
    export: ExportOutput,
}

#[derive(Debug, Serialize)]
struct RolesOutput {
    primary: String,
    secondary: String,
    neutral: String,
    success: String,
    warning: String,
    error: String,
    info: String,
}

#[derive(Debug, Serialize)]
struct ExportOutput {
    output_dir: String,
    default_format: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.output_dir.is_none() && self.default_format.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --output-dir or --default-format",
            ));
        }

        // Missing config files start from defaults
        let mut config = match &self.config {
            Some(path) if path.exists() => load_config(Some(path.as_path()))?,
            Some(_) => Config::new(),
            None => Config::load().unwrap_or_else(|_| Config::new()),
        };

        if let Some(path) = &self.output_dir {
            config.export.output_dir.clone_from(path);
        }

        if let Some(format) = &self.default_format {
            let format: ExportFormat = format.parse().map_err(CliError::validation)?;
            config.export.default_format = format;
        }

        let save_result = match &self.config {
            Some(path) => config.save_to(path),
            None => config.save(),
        };
        save_result.map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        roles: RolesOutput {
            primary: config.roles.primary.to_hex(),
            secondary: config.roles.secondary.to_hex(),
            neutral: config.roles.neutral.to_hex(),
            success: config.roles.supporting.success.to_hex(),
            warning: config.roles.supporting.warning.to_hex(),
            error: config.roles.supporting.error.to_hex(),
            info: config.roles.supporting.info.to_hex(),
        },
        export: ExportOutput {
            output_dir: config.export.output_dir.to_string_lossy().to_string(),
            default_format: config.export.default_format.to_string(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("ShadeGen Configuration");
    println!("======================");
    println!();

    println!("Roles:");
    println!("  Primary:    {}", config.roles.primary.to_hex());
    println!("  Secondary:  {}", config.roles.secondary.to_hex());
    println!("  Neutral:    {}", config.roles.neutral.to_hex());
    println!("  Success:    {}", config.roles.supporting.success.to_hex());
    println!("  Warning:    {}", config.roles.supporting.warning.to_hex());
    println!("  Error:      {}", config.roles.supporting.error.to_hex());
    println!("  Info:       {}", config.roles.supporting.info.to_hex());
    println!();

    println!("Export:");
    println!("  Output Directory: {}", config.export.output_dir.display());
    println!("  Default Format:   {}", config.export.default_format);
    println!();
}
