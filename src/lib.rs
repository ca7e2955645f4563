//! Tonal Palette Library
//!
//! This library provides core functionality for the ShadeGen palette
//! generator, including color models, shade scale generation, and export
//! to stylesheet and design-token formats.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod palette;
#[cfg(feature = "web")]
pub mod web;
