//! Data models for colors, shades, and palette groups.
//!
//! This module contains the core data structures used throughout the
//! application. Models are independent of the CLI and export layers.

pub mod hsl;
pub mod rgb;
pub mod shade;

// Re-export all model types
pub use hsl::HslColor;
pub use rgb::RgbColor;
pub use shade::{ColorGroup, Shade};
