//! Generate command for shade scales.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{parse_hex_arg, CliError, CliResult};
use crate::models::Shade;
use crate::palette::generate_shades;

/// Generate the shade scale for a base color
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Base color in hex format (#RRGGBB or #RGB)
    #[arg(short, long, value_name = "HEX")]
    pub color: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response type
#[derive(Debug, Serialize)]
struct ShadeScaleResponse {
    base: String,
    count: usize,
    shades: Vec<Shade>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let base = parse_hex_arg(&self.color).map_err(CliError::validation)?;
        let shades = generate_shades(base);

        if self.json {
            let response = ShadeScaleResponse {
                base: base.to_hex(),
                count: shades.len(),
                shades,
            };

            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Shades for {}:", base.to_hex());
            println!();
            for shade in &shades {
                println!("  {:<6} {:<9} {}", shade.level, shade.hex, shade.hsl);
            }
        }

        Ok(())
    }
}
