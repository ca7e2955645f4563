//! Export functionality for color groups.
//!
//! This module renders a color group (title, base color, shade scale) into
//! textual configuration formats: a Tailwind theme extension, CSS custom
//! properties, Sass variables, and a structured JSON document. Each
//! renderer is a pure string construction with no side effects.

pub mod css;
pub mod format;
pub mod json;
pub mod sass;
pub mod tailwind;
pub mod variables;

// Re-export the renderer entry points and format dispatch
pub use css::generate_css_variables;
pub use format::ExportFormat;
pub use json::generate_json;
pub use sass::generate_sass_variables;
pub use tailwind::generate_tailwind_config;
pub use variables::variable_prefix;
