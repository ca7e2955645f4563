//! End-to-end tests for `shadegen palette`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;
use std::process::Command;

use serde_json::Value;

mod fixtures;
use fixtures::*;

/// Path to the shadegen binary
fn shadegen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_shadegen")
}

#[test]
fn test_palette_show_lists_default_roles() {
    let (config_path, config_temp) = temp_config_default();

    let output = Command::new(shadegen_bin())
        .args(["palette", "show", "--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Palette roles (7):"));
    assert!(stdout.contains("primary"));
    assert!(stdout.contains("#3B82F6"));
    assert!(stdout.contains("info"));
    assert!(stdout.contains("#06B6D4"));
}

#[test]
fn test_palette_show_json() {
    let (config_path, config_temp) = temp_config_with_primary("#112233");

    let output = Command::new(shadegen_bin())
        .args([
            "palette",
            "show",
            "--json",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let parsed: Value = serde_json::from_slice(&output.stdout).expect("JSON should parse");
    assert_eq!(parsed["count"], 7);

    let roles = parsed["roles"].as_array().expect("roles array");
    assert_eq!(roles[0]["role"], "primary");
    assert_eq!(roles[0]["color"], "#112233");
}

#[test]
fn test_palette_set_updates_one_role_keeps_others() {
    let (config_path, config_temp) = temp_config_default();

    let output = Command::new(shadegen_bin())
        .args([
            "palette",
            "set",
            "--role",
            "secondary",
            "--color",
            "#AB12CD",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Set should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Role 'secondary' set to #AB12CD."));

    // Verify through show --json: one role changed, the others kept
    let output = Command::new(shadegen_bin())
        .args([
            "palette",
            "show",
            "--json",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    let roles = parsed["roles"].as_array().unwrap();

    let color_of = |name: &str| -> String {
        roles
            .iter()
            .find(|item| item["role"] == name)
            .and_then(|item| item["color"].as_str())
            .map(String::from)
            .unwrap_or_default()
    };

    assert_eq!(color_of("secondary"), "#AB12CD");
    assert_eq!(color_of("primary"), "#3B82F6");
    assert_eq!(color_of("neutral"), "#64748B");
    assert_eq!(color_of("error"), "#EF4444");
}

#[test]
fn test_palette_set_creates_missing_config() {
    let (config_path, config_temp) = temp_config_default();
    let fresh_path = config_path.with_file_name("fresh.toml");

    let output = Command::new(shadegen_bin())
        .args([
            "palette",
            "set",
            "--role",
            "warning",
            "--color",
            "#FFAA00",
            "--config",
            fresh_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(fresh_path.exists(), "Config file should be created");

    let content = fs::read_to_string(&fresh_path).unwrap();
    assert!(content.contains("warning = \"#FFAA00\""));
}

#[test]
fn test_palette_set_rejects_unknown_role() {
    let (config_path, config_temp) = temp_config_default();

    let output = Command::new(shadegen_bin())
        .args([
            "palette",
            "set",
            "--role",
            "accent",
            "--color",
            "#FFAA00",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid role 'accent'"));
}

#[test]
fn test_palette_export_writes_file_per_role() {
    let (config_path, config_temp) = temp_config_default();
    let out_dir = config_temp.path().join("exports");

    let output = Command::new(shadegen_bin())
        .args([
            "palette",
            "export",
            "--format",
            "sass",
            "--out-dir",
            out_dir.to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Exported 7 sass palettes to:"));

    for role in [
        "primary", "secondary", "neutral", "success", "warning", "error", "info",
    ] {
        let path = out_dir.join(format!("{role}.scss"));
        assert!(path.exists(), "Missing export for role {role}");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&format!("${role}-base: #")));
        assert_eq!(content.lines().count(), 11);
    }
}

#[test]
fn test_palette_export_uses_configured_default_format() {
    let (config_path, config_temp) = temp_config_raw(
        "[export]\ndefault_format = \"json\"\n",
    );
    let out_dir = config_temp.path().join("exports");

    let output = Command::new(shadegen_bin())
        .args([
            "palette",
            "export",
            "--out-dir",
            out_dir.to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Export should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let primary = out_dir.join("primary.json");
    assert!(primary.exists());

    let parsed: Value =
        serde_json::from_str(&fs::read_to_string(&primary).unwrap()).expect("valid JSON");
    assert_eq!(parsed["base"], "#3B82F6");
}
