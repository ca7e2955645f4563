//! Shared types and helpers for CLI command handlers.

use regex::Regex;
use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::models::RgbColor;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands, mapped to process exit codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Invalid arguments or input values (exit code 2)
    Validation(String),
    /// Filesystem, clipboard, or serialization failures (exit code 1)
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Validation(_) => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) | Self::Io(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Validates hex color input (#RRGGBB or #RGB) and returns an `RgbColor`.
///
/// Shorthand input is expanded to the full six-digit form before the strict
/// parse; the leading `#` is optional.
pub fn parse_hex_arg(color: &str) -> Result<RgbColor, String> {
    let color = color.trim();
    let hex_regex = Regex::new(r"^#?([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$")
        .map_err(|_| "Failed to create hex regex".to_string())?;

    let Some(captures) = hex_regex.captures(color) else {
        return Err(format!(
            "Invalid hex color format: '{color}'. Expected #RRGGBB or #RGB"
        ));
    };

    let hex = &captures[1];

    // Expand short hex format (#RGB -> #RRGGBB)
    let expanded = if hex.len() == 3 {
        let digits: Vec<char> = hex.chars().collect();
        format!(
            "#{0}{0}{1}{1}{2}{2}",
            digits[0], digits[1], digits[2]
        )
    } else {
        format!("#{hex}")
    };

    RgbColor::from_hex(&expanded).map_err(|e| format!("Failed to parse color: {e}"))
}

/// Loads configuration from an explicit file or the user config location.
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let result = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    result.map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))
}
