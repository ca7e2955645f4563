//! CLI command handlers for ShadeGen.
//!
//! This module provides headless, scriptable access to shade generation and
//! palette export for automation, testing, and CI/CD integration.

pub mod common;
pub mod config;
pub mod export;
pub mod generate;
pub mod palette;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use generate::GenerateArgs;
pub use palette::PaletteArgs;
