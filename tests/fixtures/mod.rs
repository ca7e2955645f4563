//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use shadegen::config::{ColorRole, Config};
use shadegen::models::RgbColor;

/// Creates a temp directory holding a config file with default roles.
///
/// Returns the config file path and the temp dir guard (keep it alive for
/// the duration of the test).
pub fn temp_config_default() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");

    Config::new()
        .save_to(&path)
        .expect("Failed to write config fixture");

    (path, temp_dir)
}

/// Creates a temp config file with a custom primary color.
pub fn temp_config_with_primary(hex: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");

    let mut config = Config::new();
    config.roles.set(
        ColorRole::Primary,
        RgbColor::from_hex(hex).expect("Fixture hex should parse"),
    );
    config
        .save_to(&path)
        .expect("Failed to write config fixture");

    (path, temp_dir)
}

/// Writes raw TOML content to a temp config file.
pub fn temp_config_raw(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");

    fs::write(&path, content).expect("Failed to write config fixture");

    (path, temp_dir)
}
