//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving palette configuration
//! in TOML format with platform-specific directory resolution. The palette
//! is a fixed set of named color roles; updating one role replaces that
//! field and leaves the others untouched.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::export::ExportFormat;
use crate::models::RgbColor;

/// A named color role within the configured palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Main brand color
    Primary,
    /// Complementary accent color
    Secondary,
    /// Foundation color for text, backgrounds, and borders
    Neutral,
    /// Positive actions and confirmations
    Success,
    /// Cautionary messages
    Warning,
    /// Error states and destructive actions
    Error,
    /// Informational messages
    Info,
}

impl ColorRole {
    /// All roles in display order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Primary,
            Self::Secondary,
            Self::Neutral,
            Self::Success,
            Self::Warning,
            Self::Error,
            Self::Info,
        ]
    }

    /// Display title for this role, used as the export group title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Neutral => "Neutral",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }
}

impl FromStr for ColorRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "neutral" => Ok(Self::Neutral),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            _ => Err(format!(
                "Invalid role '{value}'. Must be one of: primary, secondary, neutral, success, warning, error, info"
            )),
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title().to_lowercase())
    }
}

/// Base colors for state communication, used sparingly in an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportingColors {
    /// Positive actions, successful operations, confirmations
    pub success: RgbColor,
    /// Cautionary messages and actions that need attention
    pub warning: RgbColor,
    /// Error states, destructive actions, critical issues
    pub error: RgbColor,
    /// Informational messages, help text, neutral notifications
    pub info: RgbColor,
}

impl Default for SupportingColors {
    fn default() -> Self {
        Self {
            success: RgbColor::new(34, 197, 94),  // #22C55E
            warning: RgbColor::new(245, 158, 11), // #F59E0B
            error: RgbColor::new(239, 68, 68),    // #EF4444
            info: RgbColor::new(6, 182, 212),     // #06B6D4
        }
    }
}

/// Base colors for the main palette roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleConfig {
    /// Main brand color
    pub primary: RgbColor,
    /// Complementary accent color
    pub secondary: RgbColor,
    /// Foundation color for text, backgrounds, and borders
    pub neutral: RgbColor,
    /// State colors
    pub supporting: SupportingColors,
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            primary: RgbColor::new(59, 130, 246),   // #3B82F6
            secondary: RgbColor::new(16, 185, 129), // #10B981
            neutral: RgbColor::new(100, 116, 139),  // #64748B
            supporting: SupportingColors::default(),
        }
    }
}

impl RoleConfig {
    /// Returns the base color configured for a role.
    #[must_use]
    pub const fn get(&self, role: ColorRole) -> RgbColor {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Neutral => self.neutral,
            ColorRole::Success => self.supporting.success,
            ColorRole::Warning => self.supporting.warning,
            ColorRole::Error => self.supporting.error,
            ColorRole::Info => self.supporting.info,
        }
    }

    /// Replaces the base color for one role, leaving the others untouched.
    pub fn set(&mut self, role: ColorRole, color: RgbColor) {
        match role {
            ColorRole::Primary => self.primary = color,
            ColorRole::Secondary => self.secondary = color,
            ColorRole::Neutral => self.neutral = color,
            ColorRole::Success => self.supporting.success = color,
            ColorRole::Warning => self.supporting.warning = color,
            ColorRole::Error => self.supporting.error = color,
            ColorRole::Info => self.supporting.info = color,
        }
    }
}

/// Export preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory palette exports are written to
    pub output_dir: PathBuf,
    /// Format used when none is given on the command line
    #[serde(default)]
    pub default_format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let output_dir = Self::default_output_dir().unwrap_or_else(|_| PathBuf::from("exports"));

        Self {
            output_dir,
            default_format: ExportFormat::default(),
        }
    }
}

impl ExportConfig {
    /// Gets the default export output directory path.
    ///
    /// - Linux: `~/.config/ShadeGen/exports/`
    /// - macOS: `~/Library/Application Support/ShadeGen/exports/`
    /// - Windows: `%APPDATA%\ShadeGen\exports\`
    fn default_output_dir() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("exports"))
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ShadeGen/config.toml`
/// - macOS: `~/Library/Application Support/ShadeGen/config.toml`
/// - Windows: `%APPDATA%\ShadeGen\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Palette role base colors
    #[serde(default)]
    pub roles: RoleConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ShadeGen");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the user config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to the user config file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)
    }

    /// Saves configuration to an explicit file path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .context(format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
